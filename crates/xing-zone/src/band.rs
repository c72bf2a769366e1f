//! Axis-aligned zone bands.

use xing_core::Axis;

use crate::{ZoneError, ZoneResult};

/// A named band of the plane: all points whose coordinate along `axis` lies
/// in `[start, end]`.  The road-crossing zone is a y-band; the vehicle- and
/// rail-crossing zones are x-bands.
#[derive(Copy, Clone, Debug)]
pub struct ZoneBand {
    pub axis:  Axis,
    pub start: f64,
    pub end:   f64,
}

impl ZoneBand {
    /// Construct a band, rejecting `start >= end` at configuration time.
    pub fn new(axis: Axis, start: f64, end: f64) -> ZoneResult<Self> {
        if start >= end {
            return Err(ZoneError::DegenerateBand { axis, start, end });
        }
        Ok(Self { axis, start, end })
    }

    /// The two stop boundaries this band contributes (its edges).
    pub fn boundaries(&self) -> Vec<f64> {
        vec![self.start, self.end]
    }
}
