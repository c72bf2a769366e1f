//! The coordination state machine.
//!
//! One struct owns every cross-population flag; the tick loop feeds it
//! events and reads the level-triggered `held` answers back out.  Priority
//! is resolved here and nowhere else:
//!
//! - rail > {pedestrians, vehicles}: rail is never held, and while rail
//!   occupies the crossing the pedestrian stop zone relocates to the rail
//!   band;
//! - pedestrians and vehicles mutually exclude through their two zones;
//! - a population's own occupancy never holds itself.
//!
//! The pedestrian hold is the OR of two independent causes (vehicle in
//! crossing, rail in crossing), so releasing the rail hold re-evaluates
//! against a vehicle still mid-crossing instead of blindly releasing.

use xing_core::Population;

use crate::CrossingEvent;

/// Which band pedestrians currently brake toward.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum PedStopBand {
    /// Ordinary operation: stop at the road edges.
    #[default]
    Road,
    /// Rail override: stop at the rail-band edges.
    Rail,
}

/// All shared coordination state for one simulation run.
///
/// Created once at simulation start; lives until teardown.
#[derive(Clone, Debug, Default)]
pub struct CoordinationState {
    vehicle_held: bool,
    ped_held_by_vehicle: bool,
    ped_held_by_rail: bool,
    ped_stop_band: PedStopBand,
}

impl CoordinationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one edge-triggered event.  Releases are idempotent: clearing
    /// a hold that was never set is a no-op.
    pub fn apply(&mut self, event: CrossingEvent) {
        match event {
            CrossingEvent::PedEnterRoad => self.vehicle_held = true,
            CrossingEvent::PedClearRoad => self.vehicle_held = false,

            CrossingEvent::CarEnterCrossing => self.ped_held_by_vehicle = true,
            CrossingEvent::CarClearCrossing => self.ped_held_by_vehicle = false,

            CrossingEvent::RailEnterCrossing => {
                self.ped_held_by_rail = true;
                self.ped_stop_band = PedStopBand::Rail;
            }
            CrossingEvent::RailClearCrossing => {
                self.ped_held_by_rail = false;
                self.ped_stop_band = PedStopBand::Road;
            }
        }
    }

    /// The level-triggered hold flag the integrator reads each tick.
    ///
    /// Rail has unconditional priority and is never held.
    pub fn held(&self, population: Population) -> bool {
        match population {
            Population::Pedestrian => self.ped_held_by_vehicle || self.ped_held_by_rail,
            Population::Vehicle    => self.vehicle_held,
            Population::Rail       => false,
        }
    }

    /// The band pedestrians currently brake toward.
    #[inline]
    pub fn ped_stop_band(&self) -> PedStopBand {
        self.ped_stop_band
    }
}
