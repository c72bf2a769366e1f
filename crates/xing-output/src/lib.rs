//! `xing-output` — simulation output writers.
//!
//! Two CSV files are produced per run:
//!
//! | File                    | Contents                                     |
//! |-------------------------|----------------------------------------------|
//! | `population_stats.csv`  | per-population counters at each snapshot     |
//! | `crossing_events.csv`   | every hold/release coordination event        |
//!
//! The backend sits behind [`OutputWriter`] and is driven by
//! [`StatsObserver`], which implements `xing_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use xing_output::{CsvWriter, StatsObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StatsObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StatsObserver;
pub use row::{EventRow, PopulationStatsRow};
pub use writer::OutputWriter;
