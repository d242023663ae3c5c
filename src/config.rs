use crate::error::{Result, WayfareError};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration, read from `config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON fixture file supplying the read-only catalog.
    /// When absent, the bundled fixture is used.
    pub fixture_path: Option<String>,
    /// Page size applied when a query does not specify a limit.
    pub default_page_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fixture_path: None,
            default_page_size: 20,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // WAYFARE_CONFIG lets deployments point at a non-default location
        let config_path =
            std::env::var("WAYFARE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            WayfareError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Fallback used when no config file is present (e.g. `browse` run
    /// from an arbitrary directory).
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_config_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            "[server]\nport = 9001\n\n[catalog]\nfixture_path = \"fixtures/catalog.json\"\ndefault_page_size = 12\n"
        )
        .unwrap();

        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(
            config.catalog.fixture_path.as_deref(),
            Some("fixtures/catalog.json")
        );
        assert_eq!(config.catalog.default_page_size, 12);
    }

    #[test]
    fn missing_file_reports_config_error() {
        let err = Config::load_from("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, WayfareError::Config(_)));
    }
}
