//! `xing-core` — foundational types for the `rust_xing` crossing simulation.
//!
//! This crate is a dependency of every other `xing-*` crate.  It intentionally
//! has no `xing-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`ids`]        | `AgentId`                                               |
//! | [`plane`]      | `Vec2`, `Axis`, `Plane` (the working rectangle)         |
//! | [`time`]       | `Tick`, `SimClock`, `SimConfig`                         |
//! | [`rng`]        | `PopulationRng` (per-population RNG)                    |
//! | [`population`] | `Population` enum                                       |
//! | [`error`]      | `XingError`, `XingResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod error;
pub mod ids;
pub mod plane;
pub mod population;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{XingError, XingResult};
pub use ids::AgentId;
pub use plane::{Axis, Plane, Vec2};
pub use population::Population;
pub use rng::PopulationRng;
pub use time::{SimClock, SimConfig, Tick};
