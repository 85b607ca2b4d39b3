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
    /// Uses `~/.config/lightbox/config.toml` on Unix/macOS, or equivalent on
    /// other platforms via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("lightbox").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
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
    /// - The base URL is a well-formed http(s) URL
    /// - The timeouts are positive
    /// - The page size is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = url::Url::parse(&self.api.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base URL '{}': {}", self.api.base_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("Base URL must be http or https, got '{}'", url.scheme()),
            });
        }

        if self.api.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Request timeout must be positive".to_string(),
            });
        }

        if self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Connect timeout must be positive".to_string(),
            });
        }

        if self.defaults.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "Page size must be positive".to_string(),
            });
        }

        Ok(())
    }
}
