//! Randomized spawn profiles — the agent factory.
//!
//! Spawn-time randomness (direction, speed, lateral drift, radius, sprite
//! variant) is drawn from the owning population's `PopulationRng`, so the
//! three arrival processes stay statistically independent.
//!
//! The plane uses screen convention: y grows southward.  "South to north"
//! therefore means negative vy and a spawn at the bottom edge.

use xing_core::{AgentId, Plane, Population, PopulationRng, Vec2};

use crate::Agent;

/// Vehicle free-flow speed as a multiple of the base speed.
const VEHICLE_SPEED_FACTOR: f64 = 2.5;
/// Rail free-flow speed as a multiple of the base speed.
const RAIL_SPEED_FACTOR: f64 = 4.0;
/// Pedestrian speed multiplier range.
const PED_SPEED_RANGE: std::ops::Range<f64> = 1.0..1.5;
/// Pedestrian lateral drift half-range, plane units per tick.
const PED_DRIFT: f64 = 0.005;
/// Pedestrian collision radius range.
const PED_RADIUS_RANGE: std::ops::Range<f64> = 7.0..12.0;

/// Population-specific statistical parameters for agent construction.
#[derive(Clone, Debug)]
pub enum SpawnProfile {
    Pedestrian {
        base_speed: f64,
        /// Probability of walking south→north.  Canonical: 0.33.
        south_north_p: f64,
        /// Absolute x range of the crossing band where pedestrians appear.
        span_x: (f64, f64),
        /// Number of interchangeable sprites to pick `visual_variant` from.
        variants: u8,
    },
    Vehicle {
        base_speed: f64,
        /// Lane-center y coordinate (vehicles travel west→east).
        lane_y: f64,
        /// Spawn offset west of the plane edge.  Canonical: 200.
        padding: f64,
        variants: u8,
    },
    Rail {
        base_speed: f64,
        /// Track-center y coordinate.
        lane_y: f64,
        /// Spawn offset beyond either plane edge.  Canonical: 900.
        padding: f64,
    },
}

impl SpawnProfile {
    /// The population this profile spawns.
    pub fn population(&self) -> Population {
        match self {
            SpawnProfile::Pedestrian { .. } => Population::Pedestrian,
            SpawnProfile::Vehicle { .. }    => Population::Vehicle,
            SpawnProfile::Rail { .. }       => Population::Rail,
        }
    }

    /// The scenario base speed this profile scales from.
    pub fn base_speed(&self) -> f64 {
        match *self {
            SpawnProfile::Pedestrian { base_speed, .. }
            | SpawnProfile::Vehicle { base_speed, .. }
            | SpawnProfile::Rail { base_speed, .. } => base_speed,
        }
    }

    /// Produce a new agent with randomized kinematics.
    ///
    /// The returned agent carries `AgentId::INVALID`; the cohort assigns the
    /// real ID at admission.
    pub fn spawn(&self, rng: &mut PopulationRng, plane: &Plane) -> Agent {
        match *self {
            SpawnProfile::Pedestrian { base_speed, south_north_p, span_x, variants } => {
                let northbound = rng.gen_bool(south_north_p);
                let speed = base_speed * rng.gen_range(PED_SPEED_RANGE);
                let vy = if northbound { -speed } else { speed };
                let vx = rng.gen_range(-PED_DRIFT..PED_DRIFT);
                let x = rng.gen_range(span_x.0..span_x.1);
                let y = if northbound {
                    plane.origin.y + plane.height
                } else {
                    plane.origin.y
                };
                self.agent(
                    Vec2::new(x, y),
                    Vec2::new(vx, vy),
                    rng.gen_range(PED_RADIUS_RANGE),
                    rng.gen_range(0..variants.max(1)),
                )
            }

            SpawnProfile::Vehicle { base_speed, lane_y, padding, variants } => {
                let speed = base_speed * VEHICLE_SPEED_FACTOR;
                self.agent(
                    Vec2::new(plane.origin.x - padding, lane_y),
                    Vec2::new(speed, 0.0),
                    0.0,
                    rng.gen_range(0..variants.max(1)),
                )
            }

            SpawnProfile::Rail { base_speed, lane_y, padding } => {
                let eastbound = rng.gen_bool(0.5);
                let speed = base_speed * RAIL_SPEED_FACTOR;
                let (x, vx) = if eastbound {
                    (plane.origin.x - padding, speed)
                } else {
                    (plane.origin.x + plane.width + padding, -speed)
                };
                self.agent(Vec2::new(x, lane_y), Vec2::new(vx, 0.0), 0.0, 0)
            }
        }
    }

    fn agent(&self, position: Vec2, velocity: Vec2, radius: f64, variant: u8) -> Agent {
        Agent {
            id:               AgentId::INVALID,
            population:       self.population(),
            position,
            velocity,
            rest_velocity:    velocity,
            radius,
            visual_variant:   variant,
            cumulative_delay: 0.0,
        }
    }
}
