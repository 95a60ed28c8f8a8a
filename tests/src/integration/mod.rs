//! Integration tests across `shared-bus`, `planet-distance` and `node-runtime`.

pub mod flows;
pub mod runtime;
