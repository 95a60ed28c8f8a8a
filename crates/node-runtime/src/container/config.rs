//! # Node Configuration
//!
//! Runtime parameters, defaulted and then overridden from the environment.
//!
//! | Variable            | Default | Meaning                                   |
//! |---------------------|---------|-------------------------------------------|
//! | `PD_QUEUE_DEPTH`    | `10`    | Pending messages per topic                |
//! | `PD_LOG_LEVEL`      | `info`  | Log filter when `RUST_LOG` is unset       |
//! | `PD_CONSOLE_BRIDGE` | `true`  | Bridge stdin/stdout to the bus topics     |

use shared_bus::DEFAULT_CHANNEL_CAPACITY;
use thiserror::Error;

pub const ENV_QUEUE_DEPTH: &str = "PD_QUEUE_DEPTH";
pub const ENV_LOG_LEVEL: &str = "PD_LOG_LEVEL";
pub const ENV_CONSOLE_BRIDGE: &str = "PD_CONSOLE_BRIDGE";

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Bus configuration.
    pub bus: BusConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Console bridge configuration.
    pub console: ConsoleConfig,
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to something that does not parse.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// Broadcast channels need room for at least one message.
    #[error("Queue depth must be at least 1")]
    InvalidQueueDepth,
}

impl NodeConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_QUEUE_DEPTH) {
            config.bus.queue_depth = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_QUEUE_DEPTH,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            if !value.trim().is_empty() {
                config.logging.default_level = value.trim().to_string();
            }
        }
        if let Some(value) = lookup(ENV_CONSOLE_BRIDGE) {
            config.console.enabled =
                parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_CONSOLE_BRIDGE,
                    value: value.clone(),
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot be used.
    ///
    /// # Errors
    /// `ConfigError::InvalidQueueDepth` for a zero queue depth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.queue_depth == 0 {
            return Err(ConfigError::InvalidQueueDepth);
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Bus configuration.
#[derive(Debug, Clone)]
pub struct BusConfig {
    /// Pending messages per topic before the oldest are dropped.
    pub queue_depth: usize,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            queue_depth: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub default_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
        }
    }
}

/// Console bridge configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Publish stdin lines on `planet` and print `distanceToEarth`.
    pub enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
