use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/catalog-dash/config.toml` on Linux, or the equivalent
    /// on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catalog-dash").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog base URL is http(s)
    /// - Page size and every page size option are positive
    /// - Notice TTL is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.catalog.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Catalog base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if self.view.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "page_size must be greater than 0".to_string(),
            });
        }

        if self.view.page_size_options.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "page_size_options must not be empty".to_string(),
            });
        }

        if self.view.page_size_options.contains(&0) {
            return Err(ConfigError::ValidationError {
                message: "page_size_options must only contain positive sizes".to_string(),
            });
        }

        if self.notices.ttl_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "notices.ttl_seconds must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
