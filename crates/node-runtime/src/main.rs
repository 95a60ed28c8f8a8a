//! # Planet Distance Node
//!
//! Entry point: answers `planet` messages with `distanceToEarth` until
//! Ctrl+C.

use anyhow::{Context, Result};
use tracing::info;

use node_runtime::container::init_logging;
use node_runtime::{NodeConfig, NodeRuntime};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = NodeConfig::from_env().context("failed to load configuration")?;

    // Initialize logging
    init_logging(&config.logging)?;

    // Create and start the node runtime
    let mut runtime = NodeRuntime::new(config);
    runtime.start();

    // Keep the node running
    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;

    // Graceful shutdown
    runtime.shutdown().await;

    Ok(())
}
