//! Logging setup.
//!
//! Installs a `tracing` subscriber that writes to stderr. `RUST_LOG` wins over
//! the configured level when set.

use crate::config::Config;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Build the env filter: `RUST_LOG` if valid, otherwise `config.log_level`.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global fmt subscriber.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}
