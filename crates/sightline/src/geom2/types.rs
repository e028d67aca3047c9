//! Basic 2D types and tolerances.
//!
//! - `Point`, `Vector`: nalgebra aliases; points compare by exact coordinates.
//! - `Segment`: ordered endpoint pair used for obstacle edges and sightlines.
//! - `PointKey`: exact bit-pattern key so input points can index hash maps.
//! - `GeomCfg`: centralizes the epsilons used by the sweep.

use nalgebra::{Point2, Vector2};

/// A location in the plane.
pub type Point = Point2<f64>;

/// A displacement in the plane.
pub type Vector = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Determinant below which a ray and a segment count as parallel.
    pub eps_parallel: f64,
    /// Polar angles closer than this are ordered by distance instead.
    pub eps_angle: f64,
    /// Relative slack when two sweep-status distances are compared.
    pub eps_dist: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-10,
            eps_angle: 1e-10,
            eps_dist: 1e-9,
        }
    }
}

/// Directed segment `start → end`.
///
/// Direction only matters when the sweep looks for the endpoint two edges
/// share; [`Segment::same_edge`] ignores it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[inline]
    pub fn has_endpoint(&self, p: Point) -> bool {
        self.start == p || self.end == p
    }

    /// Same undirected edge.
    #[inline]
    pub fn same_edge(&self, other: &Segment) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    /// If the two segments share exactly one endpoint, return
    /// `(shared, far end of self, far end of other)`.
    pub fn shared_endpoint(&self, other: &Segment) -> Option<(Point, Point, Point)> {
        if self.same_edge(other) {
            return None;
        }
        for (mine, my_far) in [(self.start, self.end), (self.end, self.start)] {
            for (theirs, their_far) in [(other.start, other.end), (other.end, other.start)] {
                if mine == theirs {
                    return Some((mine, my_far, their_far));
                }
            }
        }
        None
    }
}

/// Exact-value hash key for a point.
///
/// Two points map to the same key iff their coordinates compare equal
/// (`-0.0` is folded onto `0.0`). Only literal input coordinates should be
/// keyed; computed intersections are never looked up this way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey([u64; 2]);

impl PointKey {
    #[inline]
    fn canonical_bits(v: f64) -> u64 {
        (v + 0.0).to_bits()
    }
}

impl From<Point> for PointKey {
    #[inline]
    fn from(p: Point) -> Self {
        PointKey([Self::canonical_bits(p.x), Self::canonical_bits(p.y)])
    }
}

impl From<&Point> for PointKey {
    #[inline]
    fn from(p: &Point) -> Self {
        PointKey::from(*p)
    }
}
