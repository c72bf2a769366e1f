//! Fail-fast assembly of a [`Simulation`].
//!
//! Every parameter is validated here so the tick loop can stay infallible:
//! a `Simulation` that builds is a `Simulation` that runs.

use xing_agent::Cohort;
use xing_coord::CoordinationState;
use xing_core::{Axis, Plane, Population, PopulationRng, SimConfig};
use xing_motion::{Integrator, ReleaseStyle, StopLines};
use xing_zone::ZoneDetector;

use crate::sim::PopulationRuntime;
use crate::{
    ArrivalScheduler, PopulationSetup, SimError, SimResult, Simulation, ZoneLayout,
};

/// Braking window ahead of a stop line, plane units.
const DEFAULT_STOPPING_DISTANCE: f64 = 20.0;
/// Gap between queued vehicles, plane units.
const DEFAULT_QUEUE_SPACING: f64 = 120.0;
/// Pedestrian separation relaxation strength.
const DEFAULT_SEPARATION_STRENGTH: f64 = 0.4;
/// Queue-discharge acceleration as a fraction of free-flow base speed.
const RELEASE_ACCEL_DIVISOR: f64 = 20.0;

/// Builder for [`Simulation`].  Call [`population`](Self::population) once
/// per population, then [`build`](Self::build).
pub struct SimulationBuilder {
    config:              SimConfig,
    plane:               Plane,
    zones:               ZoneLayout,
    setups:              [Option<PopulationSetup>; 3],
    stopping_distance:   f64,
    queue_spacing:       f64,
    separation_strength: f64,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig, plane: Plane, zones: ZoneLayout) -> Self {
        Self {
            config,
            plane,
            zones,
            setups: [None, None, None],
            stopping_distance:   DEFAULT_STOPPING_DISTANCE,
            queue_spacing:       DEFAULT_QUEUE_SPACING,
            separation_strength: DEFAULT_SEPARATION_STRENGTH,
        }
    }

    /// Register one population's setup.  The slot is taken from the setup's
    /// spawn profile; registering the same population twice replaces it.
    pub fn population(mut self, setup: PopulationSetup) -> Self {
        let index = setup.profile.population().index();
        self.setups[index] = Some(setup);
        self
    }

    pub fn stopping_distance(mut self, distance: f64) -> Self {
        self.stopping_distance = distance;
        self
    }

    pub fn queue_spacing(mut self, spacing: f64) -> Self {
        self.queue_spacing = spacing;
        self
    }

    pub fn separation_strength(mut self, strength: f64) -> Self {
        self.separation_strength = strength;
        self
    }

    /// Validate everything and assemble the simulation.
    pub fn build(self) -> SimResult<Simulation> {
        self.zones.validate()?;
        if self.separation_strength < 0.0 {
            return Err(SimError::Config(format!(
                "separation strength must be non-negative, got {}",
                self.separation_strength
            )));
        }

        let clock = self.config.make_clock();
        let mut runtimes = Vec::with_capacity(3);

        // Built in index order so the array lines up with Population::index().
        for pop in [Population::Pedestrian, Population::Vehicle, Population::Rail] {
            let setup = self.setups[pop.index()].clone().ok_or_else(|| {
                SimError::Config(format!("no setup registered for population {pop}"))
            })?;
            setup.validate()?;

            let mut rng = PopulationRng::new(self.config.seed, pop);
            let scheduler = ArrivalScheduler::new(setup.arrivals, &mut rng, &clock);

            let (integrator, stops, detector) = match pop {
                Population::Pedestrian => (
                    Integrator::new(
                        Axis::Y,
                        self.stopping_distance,
                        0.0,
                        ReleaseStyle::Immediate,
                    )?,
                    StopLines::new(Axis::Y, self.zones.road_band.boundaries()),
                    ZoneDetector::new(
                        self.zones.road_band,
                        setup.detection_margin,
                        setup.footprint_length,
                    )?,
                ),
                Population::Vehicle => (
                    Integrator::new(
                        Axis::X,
                        self.stopping_distance,
                        self.queue_spacing,
                        ReleaseStyle::Staggered {
                            accel: setup.profile.base_speed() / RELEASE_ACCEL_DIVISOR,
                        },
                    )?,
                    StopLines::new(Axis::X, self.zones.crossing_band.boundaries()),
                    ZoneDetector::new(
                        self.zones.crossing_band,
                        setup.detection_margin,
                        setup.footprint_length,
                    )?,
                ),
                // Rail is never held, so it carries no stop lines.
                Population::Rail => (
                    Integrator::new(
                        Axis::X,
                        self.stopping_distance,
                        0.0,
                        ReleaseStyle::Immediate,
                    )?,
                    StopLines::none(Axis::X),
                    ZoneDetector::new(
                        self.zones.crossing_band,
                        setup.detection_margin,
                        setup.footprint_length,
                    )?,
                ),
            };

            runtimes.push(PopulationRuntime {
                cohort: Cohort::new(pop),
                profile: setup.profile,
                scheduler,
                rng,
                integrator,
                stops,
                detector,
                capacity: setup.capacity,
                prune_padding: setup.prune_padding,
            });
        }

        let runtimes: [PopulationRuntime; 3] = runtimes
            .try_into()
            .map_err(|_| SimError::Config("population runtime assembly failed".into()))?;

        Ok(Simulation {
            config:              self.config,
            clock,
            plane:               self.plane,
            coordination:        CoordinationState::new(),
            road_lines:          self.zones.road_band.boundaries(),
            rail_lines:          self.zones.rail_band.boundaries(),
            runtimes,
            separation_strength: self.separation_strength,
        })
    }
}
