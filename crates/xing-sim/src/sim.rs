//! The simulation proper: three population runtimes around one shared
//! coordination state, advanced by a phased per-tick pipeline.
//!
//! # Tick phases
//!
//! 1. **Arrivals** — poll each population's scheduler; admit if capacity
//!    allows (a refused firing is lost, not deferred).
//! 2. **Stop relocation** — point the pedestrian stop lines at the road or
//!    rail band per the coordination state.
//! 3. **Movement** — integrate each population in the fixed order
//!    vehicles → pedestrians → rail, braking the held ones; pedestrians then
//!    get one separation pass.
//! 4. **Detection & coordination** — scan each detector against
//!    post-movement positions in the fixed population order, applying every
//!    transition to the shared state (and the observer) as soon as it fires,
//!    so the next population's scan already sees it.
//! 5. **Pruning** — drop agents outside the padded plane; re-sort the
//!    pedestrian cohort by y.
//! 6. **Snapshot** — emit observer snapshots at the configured interval.
//!
//! Detection runs on positions that already moved this tick, and the holds
//! it produces first affect movement on the *next* tick — a deliberate
//! one-tick reaction latency that keeps the phase order acyclic.  Within the
//! detection pass itself, transitions apply sequentially: an enter fired by
//! an earlier population suppresses a later population's enter on the same
//! tick, so two zones turning occupied together cannot arm holds against
//! each other.

use xing_agent::{Agent, Cohort, CohortStats, SpawnProfile};
use xing_coord::{CoordinationState, CrossingEvent, PedStopBand};
use xing_core::{Plane, Population, PopulationRng, SimClock, SimConfig, Tick};
use xing_motion::{apply_separation, Integrator, StopLines};
use xing_zone::ZoneDetector;

use crate::{AgentView, ArrivalProfile, ArrivalScheduler, SimObserver, SimResult};

/// Everything one population needs per tick, bundled so the loop body is a
/// plain iteration over three of these.
pub(crate) struct PopulationRuntime {
    pub(crate) cohort:        Cohort,
    pub(crate) profile:       SpawnProfile,
    pub(crate) scheduler:     ArrivalScheduler,
    pub(crate) rng:           PopulationRng,
    pub(crate) integrator:    Integrator,
    pub(crate) stops:         StopLines,
    pub(crate) detector:      ZoneDetector,
    pub(crate) capacity:      Option<usize>,
    pub(crate) prune_padding: f64,
}

impl PopulationRuntime {
    fn admission_open(&self) -> bool {
        self.capacity.is_none_or(|cap| self.cohort.live() < cap)
    }
}

/// A fully assembled crossing simulation.  Construct via
/// [`SimulationBuilder`](crate::SimulationBuilder).
pub struct Simulation {
    pub(crate) config:              SimConfig,
    pub(crate) clock:               SimClock,
    pub(crate) plane:               Plane,
    pub(crate) coordination:        CoordinationState,
    pub(crate) runtimes:            [PopulationRuntime; 3],
    /// Pedestrian stop lines while braking at the road band.
    pub(crate) road_lines:          Vec<f64>,
    /// Pedestrian stop lines while rail occupies the crossing.
    pub(crate) rail_lines:          Vec<f64>,
    pub(crate) separation_strength: f64,
}

impl Simulation {
    // ── Driving ───────────────────────────────────────────────────────────

    /// Run to the configured end tick, then fire `on_sim_end`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Advance exactly `n` ticks — the entry point for frame-driven loops.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let tick = self.clock.current_tick;
        observer.on_tick_start(tick);

        self.admit_arrivals(tick);
        self.relocate_ped_stops();
        self.integrate();
        self.coordinate(tick, observer);
        self.prune();
        self.snapshot(tick, observer);

        observer.on_tick_end(tick);
        self.clock.advance();
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    fn admit_arrivals(&mut self, tick: Tick) {
        for pop in Population::ALL {
            let rt = &mut self.runtimes[pop.index()];
            let fired = rt.scheduler.poll(tick, &mut rt.rng, &self.clock);
            if fired && rt.admission_open() {
                let agent = rt.profile.spawn(&mut rt.rng, &self.plane);
                rt.cohort.admit(agent);
            }
        }
    }

    fn relocate_ped_stops(&mut self) {
        let lines = match self.coordination.ped_stop_band() {
            PedStopBand::Road => self.road_lines.clone(),
            PedStopBand::Rail => self.rail_lines.clone(),
        };
        self.runtimes[Population::Pedestrian.index()]
            .stops
            .relocate(lines);
    }

    fn integrate(&mut self) {
        for pop in Population::ALL {
            let held = self.coordination.held(pop);
            let rt = &mut self.runtimes[pop.index()];
            rt.integrator.tick(&mut rt.cohort.agents, held, &rt.stops);
            if pop == Population::Pedestrian {
                apply_separation(&mut rt.cohort.agents, self.separation_strength);
            }
        }
    }

    fn coordinate<O: SimObserver>(&mut self, tick: Tick, observer: &mut O) {
        for pop in Population::ALL {
            // A held population queues inside its own anticipatory margin;
            // its enter event must wait until it is actually free to cross.
            // Each transition is applied before the next population is
            // scanned: when two zones would turn occupied on the same tick,
            // the earlier scan's enter lands first and the later one is
            // suppressed, instead of both populations holding each other
            // forever.  Agents already past the stop line still emit Cleared.
            let suppress = self.coordination.held(pop);
            let rt = &mut self.runtimes[pop.index()];
            if let Some(transition) = rt.detector.scan(&rt.cohort.agents, suppress) {
                let event = CrossingEvent::from_transition(pop, transition);
                self.coordination.apply(event);
                observer.on_event(tick, event);
            }
        }
    }

    fn prune(&mut self) {
        for pop in Population::ALL {
            let rt = &mut self.runtimes[pop.index()];
            rt.cohort.prune(&self.plane, rt.prune_padding);
            if pop == Population::Pedestrian {
                rt.cohort.sort_by_y();
            }
        }
    }

    fn snapshot<O: SimObserver>(&self, tick: Tick, observer: &mut O) {
        let interval = self.config.output_interval_ticks;
        if interval == 0 || tick.0 % interval != 0 {
            return;
        }
        for pop in Population::ALL {
            let rt = &self.runtimes[pop.index()];
            let views: Vec<AgentView> = rt.cohort.agents.iter().map(AgentView::from).collect();
            observer.on_snapshot(tick, pop, &views, rt.cohort.stats());
        }
    }

    // ── Introspection ─────────────────────────────────────────────────────

    /// The tick the *next* `step` will process.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Live agents of one population, in cohort order.
    pub fn agents(&self, population: Population) -> &[Agent] {
        &self.runtimes[population.index()].cohort.agents
    }

    /// Renderer-friendly views of one population's live agents.
    pub fn views(&self, population: Population) -> impl Iterator<Item = AgentView> + '_ {
        self.agents(population).iter().map(AgentView::from)
    }

    /// Running statistics for one population.
    pub fn stats(&self, population: Population) -> CohortStats {
        self.runtimes[population.index()].cohort.stats()
    }

    /// Whether `population` is currently held by the coordination state.
    pub fn held(&self, population: Population) -> bool {
        self.coordination.held(population)
    }

    // ── Volume control ────────────────────────────────────────────────────

    /// Retune one population's interarrival distribution mid-run.  The
    /// pending firing is unaffected; the new profile applies from the next
    /// draw onward.
    pub fn set_arrival_profile(
        &mut self,
        population: Population,
        profile: ArrivalProfile,
    ) -> SimResult<()> {
        profile.validate()?;
        self.runtimes[population.index()].scheduler.retune(profile);
        Ok(())
    }
}
