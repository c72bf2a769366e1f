//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `population_stats.csv`
//! - `crossing_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, PopulationStatsRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    stats:    Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut stats = Writer::from_path(dir.join("population_stats.csv"))?;
        stats.write_record([
            "tick",
            "population",
            "live",
            "total_spawned",
            "total_pruned",
            "cumulative_delay",
            "pending_delay",
        ])?;

        let mut events = Writer::from_path(dir.join("crossing_events.csv"))?;
        events.write_record(["tick", "event"])?;

        Ok(Self { stats, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_stats(&mut self, rows: &[PopulationStatsRow]) -> OutputResult<()> {
        for row in rows {
            self.stats.write_record(&[
                row.tick.to_string(),
                row.population.to_string(),
                row.live.to_string(),
                row.total_spawned.to_string(),
                row.total_pruned.to_string(),
                format!("{:.3}", row.cumulative_delay),
                format!("{:.3}", row.pending_delay),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events
            .write_record(&[row.tick.to_string(), row.event.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stats.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
