//! # Planet Distance
//!
//! Answers `planet` messages with the minimum distance from that planet to
//! Earth, published on `distanceToEarth`.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `DistanceTable`: Fixed planet → kilometers table
//!   - `narrow_to_i32`: Truncating conversion to the output width
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `PlanetDistanceApi`: Driving port (inbound API)
//!   - `DistancePublisher`: Driven port (output channel)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `PlanetDistanceService`: Implements `PlanetDistanceApi`
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `BusDistancePublisher`: Publishes on the shared bus
//!   - `PlanetDistanceBusAdapter`: Event loop over the `planet` topic
//!
//! ## Output Range
//!
//! Distances are `i64`; the output topic carries `i32`. Uranus and Neptune
//! do not fit. Their responses are still published, truncated to the low
//! 32 bits, and a warning is logged:
//!
//! | Planet  | Distance (km)  | Published      |
//! |---------|----------------|----------------|
//! | Uranus  | 2_721_400_000  | -1_573_567_296 |
//! | Neptune | 4_347_400_000  | 52_432_704     |
//!
//! Unknown names (matching is exact and case-sensitive) are logged and
//! produce no response.
//!
//! ## Wiring
//!
//! ```ignore
//! use planet_distance::{BusDistancePublisher, PlanetDistanceBusAdapter, PlanetDistanceService};
//! use shared_bus::InMemoryEventBus;
//! use std::sync::Arc;
//!
//! let bus = Arc::new(InMemoryEventBus::new());
//! let publisher = Arc::new(BusDistancePublisher::new(bus.clone()));
//! let service = Arc::new(PlanetDistanceService::new(publisher));
//! let adapter = PlanetDistanceBusAdapter::new(&bus, service);
//!
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! tokio::spawn(adapter.run(shutdown_rx));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{BusDistancePublisher, PlanetDistanceBusAdapter};
pub use domain::{narrow_to_i32, DistanceKm, DistanceReading, DistanceTable, NarrowedDistance};
pub use error::DistanceError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{DistancePublisher, HandleOutcome, PlanetDistanceApi};
pub use service::PlanetDistanceService;
