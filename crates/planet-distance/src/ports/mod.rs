//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for the bus adapter and tests
//! - Driven Ports (outbound) - Where responses go

pub mod inbound;
pub mod outbound;

pub use inbound::{HandleOutcome, PlanetDistanceApi};
pub use outbound::DistancePublisher;
