//! `xing-agent` — agent records, cohorts, and spawn profiles.
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`agent`]   | The `Agent` record (one simulated participant)       |
//! | [`cohort`]  | `Cohort` — ordered per-population collection + stats |
//! | [`profile`] | `SpawnProfile` — randomized agent construction       |

pub mod agent;
pub mod cohort;
pub mod profile;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::Agent;
pub use cohort::{Cohort, CohortStats};
pub use profile::SpawnProfile;
