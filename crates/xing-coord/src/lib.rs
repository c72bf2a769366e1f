//! `xing-coord` — the crossing coordination protocol.
//!
//! Zone occupancy transitions become [`CrossingEvent`]s; one owned
//! [`CoordinationState`] consumes them and resolves priority (rail overrides;
//! pedestrians and vehicles mutually exclude).  Populations never mutate each
//! other's held flags directly.
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`event`] | `CrossingEvent` — closed event enum           |
//! | [`state`] | `CoordinationState`, `PedStopBand`            |

pub mod event;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::CrossingEvent;
pub use state::{CoordinationState, PedStopBand};
