//! Sweep status: obstacle edges crossing the current ray, nearest first.
//!
//! Ordering
//! - Primary key: distance from the origin to the edge along the ray.
//! - Tie (edges meeting at a vertex on the ray): the edge whose far endpoint
//!   makes the smaller angle at the shared vertex, measured from the direction
//!   back toward the origin, comes first. It is the nearer one just past the
//!   vertex.
//!
//! The ray direction is an explicit argument of every comparison. Edges that
//! cross the ray never swap order while the ray rotates (obstacle edges do not
//! cross each other), so a sorted `Vec` with binary-search insertion stays
//! valid between events.

use std::cmp::Ordering;

use crate::geom2::{ray_params, GeomCfg, Point, Segment, Vector};

/// Ordered set of edges crossing the sweep ray from `origin`.
#[derive(Clone, Debug)]
pub struct SweepStatus {
    origin: Point,
    cfg: GeomCfg,
    edges: Vec<Segment>,
}

impl SweepStatus {
    pub fn new(origin: Point, cfg: GeomCfg) -> Self {
        Self {
            origin,
            cfg,
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges in current order, nearest first.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.edges.iter()
    }

    pub fn contains(&self, edge: &Segment) -> bool {
        self.edges.iter().any(|e| e.same_edge(edge))
    }

    /// Distance from the origin to `edge`'s supporting line along `dir`.
    ///
    /// `f64::INFINITY` when the ray is parallel to the edge or points away
    /// from it. Only meaningful for edges the ray actually crosses.
    pub fn distance(&self, edge: &Segment, dir: Vector) -> f64 {
        match ray_params(self.origin, dir, edge.start, edge.end, self.cfg.eps_parallel) {
            Some((t, _)) if t >= 0.0 => t * dir.norm(),
            _ => f64::INFINITY,
        }
    }

    /// Order of `a` and `b` along the ray `dir`.
    pub fn compare(&self, a: &Segment, b: &Segment, dir: Vector) -> Ordering {
        if a.same_edge(b) {
            return Ordering::Equal;
        }
        let da = self.distance(a, dir);
        let db = self.distance(b, dir);
        if !(da.is_finite() && db.is_finite()) {
            return da.total_cmp(&db);
        }
        let slack = self.cfg.eps_dist * da.max(db).max(1.0);
        if (da - db).abs() > slack {
            return da.total_cmp(&db);
        }
        match a.shared_endpoint(b) {
            Some((shared, far_a, far_b)) => {
                let back = self.origin - shared;
                let turn_a = (far_a - shared).angle(&back);
                let turn_b = (far_b - shared).angle(&back);
                turn_a.total_cmp(&turn_b)
            }
            None => da.total_cmp(&db),
        }
    }

    /// Insert `edge` at its place for the ray `dir`. No-op if already present.
    pub fn insert(&mut self, edge: Segment, dir: Vector) {
        if self.contains(&edge) {
            return;
        }
        let mut lo = 0usize;
        let mut hi = self.edges.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.compare(&self.edges[mid], &edge, dir) == Ordering::Greater {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        self.edges.insert(lo, edge);
    }

    /// Remove `edge` (either orientation). Returns whether it was present.
    pub fn remove(&mut self, edge: &Segment) -> bool {
        match self.edges.iter().position(|e| e.same_edge(edge)) {
            Some(i) => {
                self.edges.remove(i);
                true
            }
            None => false,
        }
    }

    /// Nearest edge on the current ray.
    #[inline]
    pub fn nearest(&self) -> Option<&Segment> {
        self.edges.first()
    }

    /// Edges crossing the ray `dir` strictly between `near` and `far`
    /// (both points on that ray).
    pub fn between(&self, near: Point, far: Point, dir: Vector) -> Vec<Segment> {
        let d_near = (near - self.origin).norm();
        let d_far = (far - self.origin).norm();
        let (lo, hi) = if d_near <= d_far {
            (d_near, d_far)
        } else {
            (d_far, d_near)
        };
        let slack = self.cfg.eps_dist * hi.max(1.0);
        self.edges
            .iter()
            .filter(|e| {
                let d = self.distance(e, dir);
                d > lo + slack && d < hi - slack
            })
            .copied()
            .collect()
    }
}
