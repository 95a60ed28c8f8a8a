//! Error types for the Planet Distance service

use thiserror::Error;

/// Errors that can occur while resolving a request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    #[error("Unknown planet name: {0:?}")]
    UnknownPlanet(String),
}
