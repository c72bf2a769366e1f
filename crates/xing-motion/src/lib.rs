//! `xing-motion` — agent kinematics.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`stopline`]   | `StopLines` — braking boundaries on a travel axis      |
//! | [`integrator`] | `Integrator` — Euler step, braking, queued release     |
//! | [`separation`] | pairwise pedestrian anti-overlap                       |
//! | [`error`]      | `MotionError`, `MotionResult`                          |

pub mod error;
pub mod integrator;
pub mod separation;
pub mod stopline;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MotionError, MotionResult};
pub use integrator::{Integrator, ReleaseStyle};
pub use separation::apply_separation;
pub use stopline::StopLines;
