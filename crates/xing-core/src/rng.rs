//! Deterministic per-population RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each population gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (population_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive indices uniformly across the seed space.  This
//! means:
//!
//! - Populations never share RNG state: one population's spawn draws cannot
//!   perturb another's arrival process (each is an independent renewal
//!   process).
//! - Runs with the same master seed are bit-for-bit reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Population;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-population deterministic RNG.
///
/// Create one per population at simulation init; it drives both that
/// population's interarrival draws and its spawn-time randomness.
pub struct PopulationRng(SmallRng);

impl PopulationRng {
    /// Seed deterministically from the run's global seed and a population.
    pub fn new(global_seed: u64, population: Population) -> Self {
        let seed = global_seed ^ (population.index() as u64).wrapping_mul(MIXING_CONSTANT);
        PopulationRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A normally distributed sample via the Box–Muller transform.
    ///
    /// `rand` alone has no Gaussian distribution; two uniform draws are
    /// enough here and keep the dependency surface to the one crate.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1: f64 = self.0.gen_range(f64::MIN_POSITIVE..1.0);
        let u2: f64 = self.0.gen_range(0.0..1.0);
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }

    /// A normal sample truncated below at `min_fraction * mean`.
    ///
    /// Clamping prevents pathological near-zero interarrival delays from
    /// destabilizing the admission predicate.
    pub fn truncated_normal(&mut self, mean: f64, std_dev: f64, min_fraction: f64) -> f64 {
        self.normal(mean, std_dev).max(mean * min_fraction)
    }
}
