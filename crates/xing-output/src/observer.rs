//! `StatsObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use xing_agent::CohortStats;
use xing_coord::CrossingEvent;
use xing_core::{Population, Tick};
use xing_sim::{AgentView, SimObserver};

use crate::row::{EventRow, PopulationStatsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes population statistics and coordination
/// events to any [`OutputWriter`] backend.
///
/// Writer errors are stored internally because `SimObserver` methods have no
/// return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct StatsObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> StatsObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for StatsObserver<W> {
    fn on_event(&mut self, tick: Tick, event: CrossingEvent) {
        let row = EventRow { tick: tick.0, event: event.as_str() };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn on_snapshot(
        &mut self,
        tick: Tick,
        population: Population,
        _agents: &[AgentView],
        stats: CohortStats,
    ) {
        let row = PopulationStatsRow {
            tick:             tick.0,
            population:       population.as_str(),
            live:             stats.live as u64,
            total_spawned:    stats.total_spawned,
            total_pruned:     stats.total_pruned,
            cumulative_delay: stats.cumulative_delay,
            pending_delay:    stats.pending_delay,
        };
        let result = self.writer.write_stats(std::slice::from_ref(&row));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
