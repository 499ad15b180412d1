//! Configuration management for ModQuik.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the roster data file.
pub const DEFAULT_DATA_PATH: &str = "data/modquik.json";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for ModQuik.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON roster file (default: "data/modquik.json")
    pub data_path: PathBuf,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MODQUIK_DATA_PATH`: Path of the roster file (default: "data/modquik.json")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let data_path = match env::var("MODQUIK_DATA_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "MODQUIK_DATA_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_DATA_PATH),
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", "info")?;

        Ok(Config {
            data_path,
            log_level,
        })
    }

    /// Parse a log level variable with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!(
                            "Must be one of {}, got: {}",
                            LOG_LEVELS.join(", "),
                            val
                        ),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            log_level: "info".to_string(),
        }
    }
}
