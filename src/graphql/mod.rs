pub mod resolvers;
pub mod schema;
pub mod types;
