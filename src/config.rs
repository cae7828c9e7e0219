//! Configuration management for the contact manager.
//!
//! This module handles loading configuration from environment variables.
//! None of these settings change validation behavior; they only size the
//! store and control logging.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial capacity reserved by a new store (default: 0)
    pub initial_capacity: usize,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_STORE_INITIAL_CAPACITY`: Capacity hint for new stores (default: 0)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, ignore if missing
        let _ = dotenvy::dotenv();

        let initial_capacity = Self::parse_env_usize("CONTACT_STORE_INITIAL_CAPACITY", 0)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            initial_capacity,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 0,
            log_level: "error".to_string(),
        }
    }
}
