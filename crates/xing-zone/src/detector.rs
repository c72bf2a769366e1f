//! Edge-triggered zone occupancy detection.
//!
//! # Anticipatory margin
//!
//! Agents are partitioned by the sign of their *rest* velocity along the
//! band axis (a held agent is still classified by where it wants to go).
//! For each direction, the band is extended by `margin` on the approach side
//! only: an agent counts as present slightly before geometrically entering
//! the band, and counts as clear only once fully past it on the far side.
//!
//! For populations with a physical footprint (rail), both band edges
//! additionally expand by half the footprint length so occupancy reflects
//! the whole vehicle, not its center point.

use xing_agent::Agent;

use crate::{ZoneBand, ZoneError, ZoneResult};

/// An edge-triggered occupancy change, emitted at most once per contiguous
/// occupied/clear interval.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Transition {
    Entered,
    Cleared,
}

/// Tracks one population's occupancy of one band across ticks.
#[derive(Clone, Debug)]
pub struct ZoneDetector {
    band: ZoneBand,
    margin: f64,
    half_footprint: f64,
    occupied: bool,
}

impl ZoneDetector {
    /// `margin` is the anticipatory approach extension; `footprint_length`
    /// is the physical length of this population's agents along the band
    /// axis (0 for point agents).
    pub fn new(band: ZoneBand, margin: f64, footprint_length: f64) -> ZoneResult<Self> {
        if margin < 0.0 {
            return Err(ZoneError::NegativeMargin(margin));
        }
        Ok(Self {
            band,
            margin,
            half_footprint: footprint_length * 0.5,
            occupied: false,
        })
    }

    /// Current level-triggered occupancy state.
    #[inline]
    pub fn occupied(&self) -> bool {
        self.occupied
    }

    /// Test `agents` against the band and return the occupancy transition,
    /// if any.
    ///
    /// `suppress_enter` keeps a `Entered` transition from firing while the
    /// population is held at a line it cannot cross, so agents queueing at
    /// the margin edge do not emit spurious repeated enter events.  A
    /// `Cleared` transition is never suppressed.
    pub fn scan(&mut self, agents: &[Agent], suppress_enter: bool) -> Option<Transition> {
        let detected = agents.iter().any(|a| self.is_present(a));

        if self.occupied {
            if !detected {
                self.occupied = false;
                return Some(Transition::Cleared);
            }
        } else if detected && !suppress_enter {
            self.occupied = true;
            return Some(Transition::Entered);
        }
        None
    }

    /// Directional band membership for one agent.
    fn is_present(&self, agent: &Agent) -> bool {
        let axis = self.band.axis;
        let pos = axis.component(agent.position);
        let sign = agent.travel_sign(axis);
        if sign == 0.0 {
            return false;
        }

        let lo = self.band.start - self.half_footprint;
        let hi = self.band.end + self.half_footprint;
        if sign > 0.0 {
            // Approaching from below: margin extends the start edge.
            pos > lo - self.margin && pos < hi
        } else {
            // Approaching from above: margin extends the end edge.
            pos > lo && pos < hi + self.margin
        }
    }
}
