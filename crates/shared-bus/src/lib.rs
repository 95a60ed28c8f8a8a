//! # Shared Bus - In-Process Topic Bus
//!
//! Stands in for the messaging middleware the distance service plugs into.
//!
//! ## Topics
//!
//! ```text
//! ┌──────────────┐   "planet"    ┌──────────────────┐ "distanceToEarth" ┌──────────────┐
//! │  Publisher   │ ────────────→ │ Planet Distance  │ ────────────────→ │  Subscriber  │
//! │ (any source) │   String      │     Service      │       i32         │ (any sink)   │
//! └──────────────┘               └──────────────────┘                   └──────────────┘
//! ```
//!
//! Each topic owns its own broadcast channel. Every subscription keeps at
//! most `capacity` pending messages; a subscriber that falls behind loses
//! the oldest ones and never blocks the publisher.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{BusMessage, Topic, TopicParseError};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Pending messages per topic before the oldest are dropped.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 10;
