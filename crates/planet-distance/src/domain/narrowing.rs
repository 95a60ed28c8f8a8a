//! Output narrowing
//!
//! The output topic carries `i32`. Distances are converted by keeping the
//! low 32 bits and reading them as two's complement, the same thing an
//! `as` cast does. Out-of-range values are flagged, never clamped.

use super::distance_table::DistanceKm;

/// A distance converted to the output width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NarrowedDistance {
    /// Low 32 bits of the distance, two's complement.
    pub value: i32,
    /// True when the distance does not fit in `i32`.
    pub overflowed: bool,
}

/// Narrow a distance to `i32` by truncation.
#[allow(clippy::cast_possible_truncation)]
pub fn narrow_to_i32(distance_km: DistanceKm) -> NarrowedDistance {
    NarrowedDistance {
        value: distance_km as i32,
        overflowed: distance_km > DistanceKm::from(i32::MAX),
    }
}
