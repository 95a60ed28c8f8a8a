//! Event Bus Adapter for the Planet Distance service
//!
//! Subscribes to `planet`, hands each name to the service, and publishes
//! the service's responses on `distanceToEarth`.

use crate::ports::{DistancePublisher, PlanetDistanceApi};
use async_trait::async_trait;
use shared_bus::{BusMessage, EventPublisher, InMemoryEventBus, Subscription, Topic};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Publishes distances as `BusMessage::DistanceToEarth`
pub struct BusDistancePublisher<B: EventPublisher = InMemoryEventBus> {
    bus: Arc<B>,
}

impl<B: EventPublisher> BusDistancePublisher<B> {
    pub fn new(bus: Arc<B>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl<B: EventPublisher> DistancePublisher for BusDistancePublisher<B> {
    async fn publish_distance(&self, value: i32) -> usize {
        self.bus.publish(BusMessage::DistanceToEarth(value)).await
    }
}

/// Bus adapter driving a `PlanetDistanceApi`
///
/// The `planet` subscription is taken in `new`, so messages published
/// after construction are queued even before `run` starts.
pub struct PlanetDistanceBusAdapter<S: PlanetDistanceApi> {
    service: Arc<S>,
    subscription: Subscription,
}

impl<S: PlanetDistanceApi> PlanetDistanceBusAdapter<S> {
    /// Create a new bus adapter and subscribe to `planet`
    pub fn new(bus: &InMemoryEventBus, service: Arc<S>) -> Self {
        Self {
            service,
            subscription: bus.subscribe(Topic::Planet),
        }
    }

    /// Process messages until the bus closes or `shutdown` flips to true.
    ///
    /// Messages are handled one at a time, in arrival order. A handler call
    /// in progress is always finished before shutdown is observed. Dropping
    /// the shutdown sender also stops the loop.
    ///
    /// This should be spawned as a background task.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        info!(topic = %Topic::Planet, "[PlanetDistanceBusAdapter] Started listening");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("[PlanetDistanceBusAdapter] Shutdown requested");
                        break;
                    }
                }
                message = self.subscription.recv() => match message {
                    Some(BusMessage::Planet(name)) => {
                        self.service.handle(&name).await;
                    }
                    Some(other) => {
                        debug!(topic = %other.topic(), "Ignoring message on foreign topic");
                    }
                    None => {
                        warn!("[PlanetDistanceBusAdapter] Event stream ended, shutting down");
                        break;
                    }
                },
            }
        }
    }
}
