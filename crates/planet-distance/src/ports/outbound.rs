//! Outbound Ports (Driven Ports)
//!
//! The output channel, injected into the service so tests can capture
//! what would have been published.

use async_trait::async_trait;

/// Sink for `distanceToEarth` responses (Driven Port)
#[async_trait]
pub trait DistancePublisher: Send + Sync {
    /// Publish one distance. Fire-and-forget.
    ///
    /// # Returns
    /// The number of subscribers the value reached.
    async fn publish_distance(&self, value: i32) -> usize;
}
