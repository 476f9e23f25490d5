//! Teller configuration: the fixed amounts each button dispatches.
//!
//! Loaded from TOML. A missing file at the default location is not an
//! error and yields the reference amounts.
//!
//! ```toml
//! open_amount = 500
//! deposit_amount = 150
//! withdraw_amount = 50
//! loan_amount = 5000
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

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

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TellerConfig {
    /// Minimum deposit required to open an account
    pub open_amount: i64,
    pub deposit_amount: i64,
    pub withdraw_amount: i64,
    pub loan_amount: i64,
}

impl Default for TellerConfig {
    fn default() -> Self {
        Self {
            open_amount: 500,
            deposit_amount: 150,
            withdraw_amount: 50,
            loan_amount: 5000,
        }
    }
}

impl TellerConfig {
    /// Returns the default path to the configuration file.
    ///
    /// Uses `<config_dir>/bank-reducer/teller.toml`, falling back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bank-reducer").join("teller.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `TellerConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no teller config, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit `path`.
    ///
    /// The file must exist; it is parsed as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: TellerConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded teller config");
        Ok(config)
    }

    /// Every button amount must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let amounts = [
            ("open_amount", self.open_amount),
            ("deposit_amount", self.deposit_amount),
            ("withdraw_amount", self.withdraw_amount),
            ("loan_amount", self.loan_amount),
        ];

        for (name, value) in amounts {
            if value <= 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }
}
