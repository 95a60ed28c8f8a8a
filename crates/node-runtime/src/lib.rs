//! # Planet Distance Node Runtime
//!
//! Wires the distance service onto the shared bus and owns its lifecycle.
//!
//! ## Flow
//!
//! ```text
//!   stdin ──(console bridge)──→ "planet" ──→ PlanetDistanceBusAdapter
//!                                                     │
//!                                           PlanetDistanceService
//!                                                     │
//!   stdout ←─(console bridge)── "distanceToEarth" ←───┘
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (from env)
//! 2. Initialize logging
//! 3. Create the bus and subscribe the service to `planet`
//! 4. Start the adapter (and the console bridge, if enabled)
//! 5. Signal ready

pub mod adapters;
pub mod container;

use std::sync::Arc;

use planet_distance::{
    BusDistancePublisher, Metrics, MetricsSnapshot, PlanetDistanceBusAdapter,
    PlanetDistanceService,
};
use shared_bus::InMemoryEventBus;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub use container::{ConfigError, NodeConfig};

/// Name logged when the node is up.
pub const NODE_NAME: &str = "planet_distance";

/// The node runtime: one bus, one service, optional console bridge.
pub struct NodeRuntime {
    config: NodeConfig,
    bus: Arc<InMemoryEventBus>,
    metrics: Arc<Metrics>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver.
    shutdown_rx: watch::Receiver<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl NodeRuntime {
    /// Create a new node runtime with configuration.
    pub fn new(config: NodeConfig) -> Self {
        let bus = Arc::new(InMemoryEventBus::with_capacity(config.bus.queue_depth));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            bus,
            metrics: Arc::new(Metrics::new()),
            shutdown_tx,
            shutdown_rx,
            tasks: Vec::new(),
        }
    }

    /// The bus the node is attached to.
    pub fn bus(&self) -> Arc<InMemoryEventBus> {
        self.bus.clone()
    }

    /// Counters recorded so far.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Start all tasks. Must be called from within a tokio runtime.
    ///
    /// On return the service is subscribed to `planet`; anything published
    /// afterwards will be handled.
    pub fn start(&mut self) {
        let publisher = Arc::new(BusDistancePublisher::new(self.bus.clone()));
        let service = Arc::new(PlanetDistanceService::with_metrics(
            publisher,
            self.metrics.clone(),
        ));
        let adapter = PlanetDistanceBusAdapter::new(&self.bus, service);
        self.tasks
            .push(tokio::spawn(adapter.run(self.shutdown_rx.clone())));

        if self.config.console.enabled {
            self.tasks.push(adapters::spawn_stdout_bridge(
                &self.bus,
                self.shutdown_rx.clone(),
            ));
            self.tasks.push(adapters::spawn_stdin_bridge(
                self.bus.clone(),
                self.shutdown_rx.clone(),
            ));
        }

        info!(
            queue_depth = self.bus.capacity(),
            console = self.config.console.enabled,
            "node {NODE_NAME} is ready"
        );
    }

    /// Signal shutdown, wait for tasks, and return the final counters.
    pub async fn shutdown(self) -> MetricsSnapshot {
        info!("Shutting down node");
        let _ = self.shutdown_tx.send(true);

        for task in self.tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "Task ended abnormally");
            }
        }

        let snapshot = self.metrics.snapshot();
        info!(
            requests = snapshot.requests_handled,
            published = snapshot.responses_published,
            unknown = snapshot.unknown_planets,
            overflows = snapshot.overflows,
            "Node stopped"
        );
        snapshot
    }
}
