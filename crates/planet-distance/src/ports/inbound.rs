//! Inbound Ports (Driving Ports)
//!
//! The API the bus adapter drives, once per inbound `planet` message.

use async_trait::async_trait;

use crate::domain::DistanceReading;
use crate::error::DistanceError;

/// What a single `handle` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandleOutcome {
    /// One response was published.
    Published(DistanceReading),
    /// The name did not resolve; nothing was published.
    UnknownPlanet,
}

impl HandleOutcome {
    /// The value that went out on the output topic, if any.
    pub fn published_value(&self) -> Option<i32> {
        match self {
            Self::Published(reading) => Some(reading.value),
            Self::UnknownPlanet => None,
        }
    }
}

/// Primary planet distance API (Driving Port)
#[async_trait]
pub trait PlanetDistanceApi: Send + Sync {
    /// Resolve a planet name without publishing anything.
    ///
    /// # Errors
    /// `DistanceError::UnknownPlanet` when the name is not an exact,
    /// case-sensitive match for a table key.
    fn resolve(&self, planet_name: &str) -> Result<DistanceReading, DistanceError>;

    /// Handle one inbound request.
    ///
    /// Publishes at most one response. Unknown names are logged and
    /// dropped; overflowing distances are logged and published truncated.
    async fn handle(&self, planet_name: &str) -> HandleOutcome;
}
