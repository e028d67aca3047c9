//! Simple closed polygon obstacles.

use crate::error::ObstacleError;
use crate::geom2::{point_on_segment, Point, Segment, Vector};

/// A simple polygon given by its vertex ring (last vertex connects to the first).
///
/// Invariants:
/// - At least 3 vertices, all finite.
/// - No vertex equals its ring successor.
/// - Non-zero signed area.
///
/// Simplicity (no self-intersection) is the caller's promise; it is not checked.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    vertices: Vec<Point>,
}

impl Obstacle {
    /// Validate and wrap a vertex ring.
    pub fn new(vertices: Vec<Point>) -> Result<Self, ObstacleError> {
        if vertices.len() < 3 {
            return Err(ObstacleError::TooFewVertices(vertices.len()));
        }
        for (index, v) in vertices.iter().enumerate() {
            if !(v.x.is_finite() && v.y.is_finite()) {
                return Err(ObstacleError::NonFinite { index });
            }
        }
        let n = vertices.len();
        for index in 0..n {
            if vertices[index] == vertices[(index + n - 1) % n] {
                return Err(ObstacleError::RepeatedVertex { index });
            }
        }
        let obstacle = Self { vertices };
        let area = obstacle.signed_area();
        if area.abs() <= 1e-12 * obstacle.extent_sq().max(f64::MIN_POSITIVE) {
            return Err(ObstacleError::Degenerate { area });
        }
        Ok(obstacle)
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, ObstacleError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed obstacle; kept for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Boundary edges `v[i] → v[i+1]`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Ring predecessor and successor of vertex `index`.
    #[inline]
    pub fn neighbors(&self, index: usize) -> (Point, Point) {
        let n = self.vertices.len();
        (
            self.vertices[(index + n - 1) % n],
            self.vertices[(index + 1) % n],
        )
    }

    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.vertices.iter().position(|&v| v == p)
    }

    /// `a` and `b` are consecutive on the ring (in either order).
    pub fn are_adjacent(&self, a: Point, b: Point) -> bool {
        self.index_of(a).is_some_and(|i| {
            let (prev, next) = self.neighbors(i);
            prev == b || next == b
        })
    }

    /// Shoelace area; positive for a counter-clockwise ring.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .edges()
            .map(|e| e.start.x * e.end.y - e.end.x * e.start.y)
            .sum();
        0.5 * twice
    }

    /// Vertex average (not the area centroid).
    pub fn centroid(&self) -> Point {
        let sum = self
            .vertices
            .iter()
            .fold(Vector::zeros(), |acc, v| acc + v.coords);
        Point::from(sum / self.vertices.len() as f64)
    }

    /// Strict interior test (even-odd rule). Boundary points report `false`.
    pub fn contains(&self, p: Point) -> bool {
        if self.edges().any(|e| point_on_segment(p, e.start, e.end)) {
            return false;
        }
        let mut inside = false;
        for e in self.edges() {
            let (a, b) = (e.start, e.end);
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Rigid shift of every vertex, in place.
    pub fn translate(&mut self, by: Vector) {
        for v in &mut self.vertices {
            *v += by;
        }
    }

    /// Owned variant of [`Obstacle::translate`].
    pub fn translated(mut self, by: Vector) -> Self {
        self.translate(by);
        self
    }

    fn extent_sq(&self) -> f64 {
        let (mut lo, mut hi) = (self.vertices[0], self.vertices[0]);
        for v in &self.vertices {
            lo = Point::new(lo.x.min(v.x), lo.y.min(v.y));
            hi = Point::new(hi.x.max(v.x), hi.y.max(v.y));
        }
        (hi - lo).norm_squared()
    }
}
