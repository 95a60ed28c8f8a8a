//! # Bus Messages
//!
//! Every message that flows through the shared bus, and the topics they
//! travel on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// All messages that can be published to the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusMessage {
    /// A planet name to look up. Carried verbatim, no normalization.
    Planet(String),

    /// Distance from the requested planet to Earth, in kilometers.
    DistanceToEarth(i32),
}

impl BusMessage {
    /// Get the topic this message travels on.
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            Self::Planet(_) => Topic::Planet,
            Self::DistanceToEarth(_) => Topic::DistanceToEarth,
        }
    }
}

/// Named topics on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// Inbound planet names.
    Planet,
    /// Outbound distances.
    DistanceToEarth,
}

impl Topic {
    /// Every topic the bus carries.
    pub const ALL: [Topic; 2] = [Topic::Planet, Topic::DistanceToEarth];

    /// Wire name of the topic.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::DistanceToEarth => "distanceToEarth",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A topic name that the bus does not carry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown topic: {0}")]
pub struct TopicParseError(pub String);

impl FromStr for Topic {
    type Err = TopicParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| TopicParseError(s.to_string()))
    }
}
