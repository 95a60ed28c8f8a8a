//! # Planet Distance Test Suite
//!
//! Cross-crate tests that drive the service through the shared bus.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs      # Request/response over the bus
//!     └── runtime.rs    # Full node lifecycle
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pd-tests
//! cargo test -p pd-tests integration::flows
//! ```

pub mod integration;
