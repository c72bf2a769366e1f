//! The `OutputWriter` trait implemented by backend writers.

use crate::{EventRow, OutputResult, PopulationStatsRow};

/// Backend writer for simulation output.
///
/// Driven by [`StatsObserver`][crate::StatsObserver], whose callbacks have no
/// return value — errors are stored there and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write a batch of per-population snapshot rows.
    fn write_stats(&mut self, rows: &[PopulationStatsRow]) -> OutputResult<()>;

    /// Write one coordination event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
