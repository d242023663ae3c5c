use thiserror::Error;

#[derive(Error, Debug)]
pub enum WayfareError {
    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fixture catalog error: {0}")]
    Fixture(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Wizard requires at least one step")]
    EmptyWizard,
}

pub type Result<T> = std::result::Result<T, WayfareError>;
