//! Planet Distance Service
//!
//! Turns one planet name into at most one published distance.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{narrow_to_i32, DistanceReading, DistanceTable};
use crate::error::DistanceError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{DistancePublisher, HandleOutcome, PlanetDistanceApi};

/// Planet Distance Service implementation
///
/// Implements the `PlanetDistanceApi` port using an injected publisher.
/// Holds no per-request state; every `handle` call is independent.
pub struct PlanetDistanceService<P: DistancePublisher> {
    /// Reference distances, built at construction
    table: DistanceTable,
    /// Output channel (driven port)
    publisher: Arc<P>,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<P: DistancePublisher> PlanetDistanceService<P> {
    /// Create a new service publishing through `publisher`
    pub fn new(publisher: Arc<P>) -> Self {
        Self::with_metrics(publisher, Arc::new(NoOpMetrics))
    }

    /// Create with a metrics recorder
    pub fn with_metrics(publisher: Arc<P>, metrics: Arc<dyn MetricsRecorder>) -> Self {
        Self {
            table: DistanceTable::new(),
            publisher,
            metrics,
        }
    }

    /// The table this service answers from
    pub fn table(&self) -> &DistanceTable {
        &self.table
    }
}

#[async_trait]
impl<P: DistancePublisher + 'static> PlanetDistanceApi for PlanetDistanceService<P> {
    fn resolve(&self, planet_name: &str) -> Result<DistanceReading, DistanceError> {
        let distance_km = self
            .table
            .get(planet_name)
            .ok_or_else(|| DistanceError::UnknownPlanet(planet_name.to_string()))?;

        let narrowed = narrow_to_i32(distance_km);

        Ok(DistanceReading {
            planet: planet_name.to_string(),
            distance_km,
            value: narrowed.value,
            overflowed: narrowed.overflowed,
        })
    }

    async fn handle(&self, planet_name: &str) -> HandleOutcome {
        self.metrics.record_request();

        let reading = match self.resolve(planet_name) {
            Ok(reading) => reading,
            Err(e) => {
                self.metrics.record_unknown_planet();
                info!(planet = ?planet_name, "{e}");
                return HandleOutcome::UnknownPlanet;
            }
        };

        if reading.overflowed {
            self.metrics.record_overflow();
            warn!(
                planet = %reading.planet,
                distance_km = reading.distance_km,
                value = reading.value,
                "Output value overflowed i32, publishing truncated value"
            );
        }

        self.publisher.publish_distance(reading.value).await;
        self.metrics.record_published();

        HandleOutcome::Published(reading)
    }
}
