//! Adapters Layer
//!
//! Connects the service to the shared bus:
//! - `BusDistancePublisher`: publishes responses on `distanceToEarth`
//! - `PlanetDistanceBusAdapter`: drives the service from `planet`

pub mod bus_adapter;

pub use bus_adapter::{BusDistancePublisher, PlanetDistanceBusAdapter};
