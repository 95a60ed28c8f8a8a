//! # Container
//!
//! Configuration and logging bootstrap for the node.

pub mod config;
pub mod logging;

pub use config::{BusConfig, ConfigError, ConsoleConfig, LoggingConfig, NodeConfig};
pub use logging::init_logging;
