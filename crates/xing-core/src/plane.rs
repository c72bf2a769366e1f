//! Flat simulation-plane geometry.
//!
//! The simulation runs in an un-normalized cartesian plane: x grows east,
//! y grows south (screen convention, matching the source artwork).  Agents
//! may leave the nominal `[0,w] × [0,h]` rectangle; pruning uses a
//! per-population padding beyond it.
//!
//! Coordinates are `f64` so that pure Euler integration of round velocities
//! stays exact (`-200 + 2k` after `k` ticks is representable bit-for-bit).

use crate::{XingError, XingResult};

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// A 2-D point or velocity in plane units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Axis ──────────────────────────────────────────────────────────────────────

/// One of the two plane axes.  Zones are bands along an axis; each population
/// travels (and brakes) along one axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The component of `v` along this axis.
    #[inline]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Mutable component of `v` along this axis.
    #[inline]
    pub fn component_mut(self, v: &mut Vec2) -> &mut f64 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }
}

// ── Plane ─────────────────────────────────────────────────────────────────────

/// The nominal working rectangle `[origin.x, origin.x+w] × [origin.y, origin.y+h]`.
///
/// Agents spawn on its edges and are pruned once they leave it by more than
/// the population's padding.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub origin: Vec2,
    pub width:  f64,
    pub height: f64,
}

impl Plane {
    /// Construct a plane, rejecting non-positive dimensions.
    pub fn new(origin: Vec2, width: f64, height: f64) -> XingResult<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(XingError::Config(format!(
                "plane dimensions must be positive, got {width} × {height}"
            )));
        }
        Ok(Self { origin, width, height })
    }

    /// `true` if `p` lies within the rectangle extended by `padding` on all
    /// sides.  `padding = 0` tests the strict working rectangle.
    #[inline]
    pub fn contains_padded(&self, p: Vec2, padding: f64) -> bool {
        p.x >= self.origin.x - padding
            && p.x <= self.origin.x + self.width + padding
            && p.y >= self.origin.y - padding
            && p.y <= self.origin.y + self.height + padding
    }
}
