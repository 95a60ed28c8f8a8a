//! # Runtime Adapters
//!
//! Bridges between the outside world and the shared bus.

pub mod console;

pub use console::{spawn_stdin_bridge, spawn_stdout_bridge};
