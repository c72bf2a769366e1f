//! Stop boundaries on a population's axis of travel.

use xing_core::Axis;

/// The set of coordinates a held population brakes toward.
///
/// A band contributes two boundaries (its near edge per direction): agents
/// travelling in the positive axis direction brake at the smallest line,
/// agents travelling negatively at the largest — each direction stops before
/// entering, never in the middle.
#[derive(Clone, Debug)]
pub struct StopLines {
    pub axis: Axis,
    lines: Vec<f64>,
}

impl StopLines {
    pub fn new(axis: Axis, lines: Vec<f64>) -> Self {
        Self { axis, lines }
    }

    /// A population with nothing to brake toward (rail).
    pub fn none(axis: Axis) -> Self {
        Self { axis, lines: Vec::new() }
    }

    /// Replace the boundaries in place (stop-zone relocation under rail
    /// priority).
    pub fn relocate(&mut self, lines: Vec<f64>) {
        self.lines = lines;
    }

    /// The boundary an agent travelling with `sign` (+1/-1) brakes toward,
    /// or `None` when no lines are configured or the agent does not travel
    /// on this axis.
    pub fn boundary_for(&self, sign: f64) -> Option<f64> {
        if self.lines.is_empty() || sign == 0.0 {
            return None;
        }
        if sign > 0.0 {
            self.lines.iter().copied().reduce(f64::min)
        } else {
            self.lines.iter().copied().reduce(f64::max)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
