//! Service Layer
//!
//! Orchestrates domain logic and the output port.

pub mod planet_distance_service;

pub use planet_distance_service::PlanetDistanceService;
