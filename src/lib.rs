pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod server;
pub mod source;
pub mod wizard;
