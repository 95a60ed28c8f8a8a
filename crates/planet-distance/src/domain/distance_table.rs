//! Distance Table
//!
//! Minimum distance from each planet of the solar system to Earth, in
//! kilometers. The table is a fixed reference; no orbital modeling.

use std::collections::HashMap;

/// Distance in kilometers.
pub type DistanceKm = i64;

/// Minimum planet-to-Earth distances.
///
/// Uranus and Neptune do not fit in `i32`.
pub const MIN_DISTANCES_KM: [(&str, DistanceKm); 8] = [
    ("Mercury", 91_600_000),
    ("Venus", 41_400_000),
    ("Earth", 0),
    ("Mars", 78_300_000),
    ("Jupiter", 628_400_000),
    ("Saturn", 1_277_400_000),
    ("Uranus", 2_721_400_000),
    ("Neptune", 4_347_400_000),
];

/// Immutable planet name → distance lookup.
///
/// Names match exactly and case-sensitively. Built once and only ever read,
/// so a single table can be shared across tasks without locking.
#[derive(Clone, Debug)]
pub struct DistanceTable {
    entries: HashMap<&'static str, DistanceKm>,
}

impl DistanceTable {
    /// Build the reference table.
    pub fn new() -> Self {
        Self {
            entries: MIN_DISTANCES_KM.into_iter().collect(),
        }
    }

    /// Look up a planet by exact name.
    pub fn get(&self, planet_name: &str) -> Option<DistanceKm> {
        self.entries.get(planet_name).copied()
    }

    /// Check if a planet is known
    pub fn contains(&self, planet_name: &str) -> bool {
        self.entries.contains_key(planet_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all `(name, distance)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, DistanceKm)> + '_ {
        self.entries.iter().map(|(name, km)| (*name, *km))
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new()
    }
}
