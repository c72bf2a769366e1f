//! Builder inputs: arrival distributions, per-population setup, zone layout.

use xing_agent::SpawnProfile;
use xing_core::Axis;
use xing_zone::ZoneBand;

use crate::{SimError, SimResult};

// ── ArrivalProfile ────────────────────────────────────────────────────────────

/// Parameters of one population's interarrival distribution: a truncated
/// normal in milliseconds, clamped below at `min_fraction × mean_ms`.
#[derive(Copy, Clone, Debug)]
pub struct ArrivalProfile {
    pub mean_ms: f64,
    pub std_ms:  f64,
    /// Lower clamp as a fraction of the mean.  Canonical: 0.1.
    pub min_fraction: f64,
}

impl ArrivalProfile {
    pub fn new(mean_ms: f64, std_ms: f64) -> Self {
        Self { mean_ms, std_ms, min_fraction: 0.1 }
    }

    /// Fail fast on degenerate distributions.
    pub fn validate(&self) -> SimResult<()> {
        if self.mean_ms <= 0.0 {
            return Err(SimError::Config(format!(
                "arrival mean must be positive, got {}",
                self.mean_ms
            )));
        }
        if self.std_ms <= 0.0 {
            return Err(SimError::Config(format!(
                "arrival std dev must be positive, got {}",
                self.std_ms
            )));
        }
        if !(0.0..1.0).contains(&self.min_fraction) {
            return Err(SimError::Config(format!(
                "arrival min fraction must be in [0, 1), got {}",
                self.min_fraction
            )));
        }
        Ok(())
    }
}

// ── PopulationSetup ───────────────────────────────────────────────────────────

/// Everything the builder needs to run one population.
#[derive(Clone, Debug)]
pub struct PopulationSetup {
    /// Spawn-time statistical parameters (also fixes the population kind).
    pub profile: SpawnProfile,

    /// Interarrival distribution.
    pub arrivals: ArrivalProfile,

    /// Admission capacity: at most this many agents in flight.  `None` is
    /// unbounded (pedestrians).  Canonical: vehicles 3, rail 1.
    pub capacity: Option<usize>,

    /// Extra margin beyond the working rectangle before an agent is pruned.
    /// Canonical: pedestrians 0, vehicles 200, rail 900.
    pub prune_padding: f64,

    /// Anticipatory detection margin.  Canonical: ped 50, car 80, rail 250.
    pub detection_margin: f64,

    /// Physical length along the travel axis (0 for point agents).
    /// Canonical: rail 450.
    pub footprint_length: f64,
}

impl PopulationSetup {
    pub(crate) fn validate(&self) -> SimResult<()> {
        self.arrivals.validate()?;
        if self.capacity == Some(0) {
            return Err(SimError::Config(
                "admission capacity must be at least 1 (use None for unbounded)".into(),
            ));
        }
        let base_speed = self.profile.base_speed();
        if base_speed <= 0.0 {
            return Err(SimError::Config(format!(
                "base speed must be positive, got {base_speed}"
            )));
        }
        if let SpawnProfile::Pedestrian { span_x, .. } = &self.profile {
            if span_x.0 >= span_x.1 {
                return Err(SimError::Config(format!(
                    "pedestrian spawn span must satisfy start < end, got ({}, {})",
                    span_x.0, span_x.1
                )));
            }
        }
        Ok(())
    }
}

// ── ZoneLayout ────────────────────────────────────────────────────────────────

/// The three bands of the canonical intersection.
#[derive(Copy, Clone, Debug)]
pub struct ZoneLayout {
    /// Roadway y-band crossed by pedestrians; pedestrian presence here holds
    /// vehicles, and its edges are the ordinary pedestrian stop lines.
    pub road_band: ZoneBand,

    /// Rail-corridor y-band; the pedestrian stop zone relocates here while
    /// rail occupies the crossing.
    pub rail_band: ZoneBand,

    /// Crossing x-band shared by vehicles and rail; occupancy by either
    /// holds pedestrians, and its edges are the vehicle stop lines.
    pub crossing_band: ZoneBand,
}

impl ZoneLayout {
    pub(crate) fn validate(&self) -> SimResult<()> {
        if self.road_band.axis != Axis::Y || self.rail_band.axis != Axis::Y {
            return Err(SimError::Config(
                "road and rail bands must lie on the y axis".into(),
            ));
        }
        if self.crossing_band.axis != Axis::X {
            return Err(SimError::Config("crossing band must lie on the x axis".into()));
        }
        Ok(())
    }
}
