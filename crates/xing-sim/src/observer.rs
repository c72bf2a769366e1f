//! Observer seam between the tick loop and the outside world (renderers,
//! stats writers, test probes).  All methods default to no-ops so observers
//! implement only what they care about.

use xing_agent::{Agent, CohortStats};
use xing_coord::CrossingEvent;
use xing_core::{AgentId, Population, Tick};

/// A read-only per-agent snapshot handed to observers.
///
/// Flattened to plain scalars so renderers never borrow into the cohort.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentView {
    pub id: AgentId,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub visual_variant: u8,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id:             agent.id,
            x:              agent.position.x,
            y:              agent.position.y,
            vx:             agent.velocity.x,
            vy:             agent.velocity.y,
            radius:         agent.radius,
            visual_variant: agent.visual_variant,
        }
    }
}

/// Callbacks fired by [`Simulation`](crate::Simulation) as it runs.
pub trait SimObserver {
    /// The tick is about to be processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A crossing-coordination event fired this tick (edge-triggered).
    fn on_event(&mut self, _tick: Tick, _event: CrossingEvent) {}

    /// Periodic population snapshot, at the configured output interval.
    fn on_snapshot(
        &mut self,
        _tick: Tick,
        _population: Population,
        _agents: &[AgentView],
        _stats: CohortStats,
    ) {
    }

    /// All phases of the tick have completed.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// The run finished (only from `run()`, not per-frame stepping).
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// The do-nothing observer, for headless runs and tests.
#[derive(Default)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
