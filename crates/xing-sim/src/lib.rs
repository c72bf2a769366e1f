//! `xing-sim` — the simulation runner.
//!
//! Wires the per-population machinery (cohorts, integrators, detectors) to
//! the shared [`CoordinationState`](xing_coord::CoordinationState) and drives
//! them through a single-threaded cooperative tick loop.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`config`]   | `ArrivalProfile`, `PopulationSetup`, `ZoneLayout`   |
//! | [`arrivals`] | `ArrivalScheduler` — polled per-population timers   |
//! | [`builder`]  | `SimulationBuilder` — validation and assembly       |
//! | [`sim`]      | `Simulation` and its phased `process_tick`          |
//! | [`observer`] | `SimObserver`, `AgentView`, `NoopObserver`          |
//! | [`error`]    | `SimError`, `SimResult`                             |

pub mod arrivals;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arrivals::ArrivalScheduler;
pub use builder::SimulationBuilder;
pub use config::{ArrivalProfile, PopulationSetup, ZoneLayout};
pub use error::{SimError, SimResult};
pub use observer::{AgentView, NoopObserver, SimObserver};
pub use sim::Simulation;
