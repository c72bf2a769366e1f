//! `xing-zone` — presence detection in named plane bands.
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`band`]     | `ZoneBand` — a validated axis-aligned band        |
//! | [`detector`] | `ZoneDetector` — edge-triggered occupancy scans   |
//! | [`error`]    | `ZoneError`, `ZoneResult`                         |

pub mod band;
pub mod detector;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use band::ZoneBand;
pub use detector::{Transition, ZoneDetector};
pub use error::{ZoneError, ZoneResult};
