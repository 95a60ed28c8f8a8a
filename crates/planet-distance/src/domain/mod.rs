//! Domain Layer
//!
//! Pure lookup and numeric logic, no I/O.

pub mod distance_table;
pub mod narrowing;

pub use distance_table::{DistanceKm, DistanceTable, MIN_DISTANCES_KM};
pub use narrowing::{narrow_to_i32, NarrowedDistance};

/// A resolved planet, ready to publish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceReading {
    /// Planet name as received.
    pub planet: String,
    /// Distance from the table.
    pub distance_km: DistanceKm,
    /// Value for the output topic.
    pub value: i32,
    /// Whether `value` is a truncation of `distance_km`.
    pub overflowed: bool,
}
