//! # Logging
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` wins; otherwise the
//! configured default directive applies.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

/// Build the filter for the given configuration.
///
/// # Errors
/// Fails if the configured default directive does not parse.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.default_level)
            .with_context(|| format!("invalid log level {:?}", config.default_level)),
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
