//! The three agent kinds sharing the intersection.

/// One of the three populations in the crossing.
///
/// Every agent belongs to exactly one population for its lifetime.  The
/// coordination protocol grants rail unconditional priority; pedestrians and
/// vehicles mutually exclude each other.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Population {
    Pedestrian,
    Vehicle,
    Rail,
}

impl Population {
    /// All populations, in the fixed per-tick processing order
    /// (vehicles → pedestrians → rail).
    pub const ALL: [Population; 3] =
        [Population::Vehicle, Population::Pedestrian, Population::Rail];

    /// Stable small index, used for RNG seed derivation.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Population::Pedestrian => 0,
            Population::Vehicle    => 1,
            Population::Rail       => 2,
        }
    }

    /// Human-readable label, useful for CSV column values and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Population::Pedestrian => "pedestrian",
            Population::Vehicle    => "vehicle",
            Population::Rail       => "rail",
        }
    }
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
