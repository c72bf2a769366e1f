//! `Cohort` — the ordered, mutable set of one population's live agents.
//!
//! # Counting discipline
//!
//! Spawn and prune are the only mutations that touch the accumulators, and
//! both are applied inside one tick as a single sequential step, so the
//! identity
//!
//!   live == total_spawned − total_pruned
//!
//! holds at every tick boundary by construction.  `total_delay` folds in each
//! pruned agent's `cumulative_delay` at the moment it leaves the padded
//! rectangle.

use xing_core::{AgentId, Plane, Population};

use crate::Agent;

/// Running statistics for one population, for external reporting.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CohortStats {
    /// Agents currently in flight.
    pub live: usize,
    /// Agents admitted so far (monotonic).
    pub total_spawned: u64,
    /// Agents pruned so far (monotonic).
    pub total_pruned: u64,
    /// Summed `cumulative_delay` of pruned agents, in ticks.
    pub cumulative_delay: f64,
    /// Summed `cumulative_delay` of agents still in flight, in ticks.
    /// Dashboards add this to `cumulative_delay` for a running total.
    pub pending_delay: f64,
}

/// An ordered collection of agents of one kind plus its accumulators.
///
/// Order is irrelevant for vehicles and rail; the pedestrian cohort is kept
/// sorted by y after each prune to stabilize pairwise separation-force
/// computation (a determinism aid, not a correctness requirement).
pub struct Cohort {
    pub population: Population,
    pub agents: Vec<Agent>,
    next_id: u64,
    total_spawned: u64,
    total_pruned: u64,
    total_delay: f64,
}

impl Cohort {
    pub fn new(population: Population) -> Self {
        Self {
            population,
            agents: Vec::new(),
            next_id: 0,
            total_spawned: 0,
            total_pruned: 0,
            total_delay: 0.0,
        }
    }

    /// Number of agents currently in flight.
    #[inline]
    pub fn live(&self) -> usize {
        self.agents.len()
    }

    /// Admit a freshly spawned agent: assign its ID, count it, and append.
    ///
    /// The admission predicate (capacity) is the caller's responsibility —
    /// the cohort itself never refuses an agent.
    pub fn admit(&mut self, mut agent: Agent) -> AgentId {
        debug_assert_eq!(agent.population, self.population);
        let id = AgentId(self.next_id);
        self.next_id += 1;
        agent.id = id;
        self.total_spawned += 1;
        self.agents.push(agent);
        id
    }

    /// Remove agents outside `plane` extended by `padding`, folding their
    /// delay into the accumulator.  Returns how many were pruned.
    pub fn prune(&mut self, plane: &Plane, padding: f64) -> usize {
        let before = self.agents.len();
        let mut folded = 0.0;
        self.agents.retain(|a| {
            if plane.contains_padded(a.position, padding) {
                true
            } else {
                folded += a.cumulative_delay;
                false
            }
        });
        let pruned = before - self.agents.len();
        self.total_pruned += pruned as u64;
        self.total_delay += folded;
        pruned
    }

    /// Stable sort by y coordinate (pedestrian cohorts only, after prune).
    pub fn sort_by_y(&mut self) {
        self.agents
            .sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
    }

    /// Snapshot of the running statistics.
    pub fn stats(&self) -> CohortStats {
        CohortStats {
            live:             self.agents.len(),
            total_spawned:    self.total_spawned,
            total_pruned:     self.total_pruned,
            cumulative_delay: self.total_delay,
            pending_delay:    self.agents.iter().map(|a| a.cumulative_delay).sum(),
        }
    }
}
