use thiserror::Error;

use xing_core::Axis;

#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("degenerate zone band on {axis:?}: start {start} >= end {end}")]
    DegenerateBand { axis: Axis, start: f64, end: f64 },

    #[error("zone margin must be non-negative, got {0}")]
    NegativeMargin(f64),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
