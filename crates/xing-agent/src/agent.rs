//! The per-agent simulation record.

use xing_core::{AgentId, Axis, Population, Vec2};

/// One simulated participant.
///
/// # Invariants
///
/// - `rest_velocity` is never mutated after spawn.
/// - `|velocity|` never exceeds `|rest_velocity|` on either axis — braking
///   scales the rest velocity down, release restores it, and the separation
///   force touches position only.
/// - An agent belongs to exactly one population for its lifetime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Assigned by the owning cohort in spawn order; unique within it.
    pub id: AgentId,

    pub population: Population,

    /// Position in plane units.  Unbounded: agents walk off the working
    /// rectangle and are pruned by the lifecycle manager, not clamped.
    pub position: Vec2,

    /// Current effective velocity, mutated each tick by braking and release.
    pub velocity: Vec2,

    /// Free-flow velocity fixed at spawn; used to recover full speed once a
    /// hold is released and to classify travel direction during detection.
    pub rest_velocity: Vec2,

    /// Collision radius.  Only pedestrians have a meaningful radius (it
    /// governs the separation force); vehicles and rail leave it 0.
    pub radius: f64,

    /// Index of the sprite/path the renderer should use.  Cosmetic only.
    pub visual_variant: u8,

    /// Wait time accrued while held, in ticks (fractional: a partially
    /// braked tick contributes its speed deficit).
    pub cumulative_delay: f64,
}

impl Agent {
    /// Sign of free-flow travel along `axis`: +1.0, -1.0, or 0.0 when the
    /// agent does not travel on that axis.
    ///
    /// Uses `rest_velocity`, not `velocity`, so a fully braked agent is
    /// still classified by the direction it wants to go.
    #[inline]
    pub fn travel_sign(&self, axis: Axis) -> f64 {
        let v = axis.component(self.rest_velocity);
        if v > 0.0 {
            1.0
        } else if v < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Fraction of this tick spent waiting: `1 − |v|/|v0|` along `axis`.
    ///
    /// Zero for an unbraked agent, one for a fully stopped one.  Callers
    /// must not pass an axis the agent does not travel on.
    #[inline]
    pub fn speed_deficit(&self, axis: Axis) -> f64 {
        let rest = axis.component(self.rest_velocity).abs();
        if rest == 0.0 {
            return 0.0;
        }
        (1.0 - axis.component(self.velocity).abs() / rest).clamp(0.0, 1.0)
    }
}
