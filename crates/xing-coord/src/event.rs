//! The closed set of crossing events.
//!
//! A small enum instead of a registry of named callbacks: every event kind is
//! known at compile time, and the coordination rules match on it exhaustively.

use xing_core::Population;
use xing_zone::Transition;

/// An edge-triggered occupancy event for one population's zone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CrossingEvent {
    /// A pedestrian entered the road band.
    PedEnterRoad,
    /// The last pedestrian left the road band.
    PedClearRoad,
    /// A vehicle entered the crossing band.
    CarEnterCrossing,
    /// The last vehicle left the crossing band.
    CarClearCrossing,
    /// A light-rail vehicle entered the crossing band.
    RailEnterCrossing,
    /// The last light-rail vehicle left the crossing band.
    RailClearCrossing,
}

impl CrossingEvent {
    /// Map a detector transition for `population`'s zone to its event.
    pub fn from_transition(population: Population, transition: Transition) -> Self {
        match (population, transition) {
            (Population::Pedestrian, Transition::Entered) => CrossingEvent::PedEnterRoad,
            (Population::Pedestrian, Transition::Cleared) => CrossingEvent::PedClearRoad,
            (Population::Vehicle, Transition::Entered)    => CrossingEvent::CarEnterCrossing,
            (Population::Vehicle, Transition::Cleared)    => CrossingEvent::CarClearCrossing,
            (Population::Rail, Transition::Entered)       => CrossingEvent::RailEnterCrossing,
            (Population::Rail, Transition::Cleared)       => CrossingEvent::RailClearCrossing,
        }
    }

    /// Label for logs and CSV event rows.
    pub fn as_str(self) -> &'static str {
        match self {
            CrossingEvent::PedEnterRoad      => "ped:enterRoad",
            CrossingEvent::PedClearRoad      => "ped:clearRoad",
            CrossingEvent::CarEnterCrossing  => "car:enterCrossing",
            CrossingEvent::CarClearCrossing  => "car:clearCrossing",
            CrossingEvent::RailEnterCrossing => "lrt:enterCrossing",
            CrossingEvent::RailClearCrossing => "lrt:clearCrossing",
        }
    }
}

impl std::fmt::Display for CrossingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
