//! Visibility oracles: which obstacle vertices a query point can see.
//!
//! - `SweepOracle`: rotational sweep, O(n log n) per query plus status upkeep.
//! - `NaiveOracle`: every candidate against every edge, O(n²) per query.
//! - `AutoOracle`: the sweep, falling back to the naive test when the scene is
//!   outside what the sweep handles (ambiguous vertex ownership, or a reference
//!   ray that crosses nothing).
//!
//! Both concrete oracles share the own-obstacle test [`hidden_by_owner`]. They
//! agree on every scene in general position; with three or more collinear
//! vertices the sweep lets a sightline run along a boundary edge or through a
//! grazed vertex, while the naive test counts the touch as blocking.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::geom2::{
    cross, point_on_segment, ray_params, segment_hits, segments_intersect, GeomCfg, Point,
    PointKey, Segment, Vector,
};
use crate::obstacle::ObstacleSet;

use super::order::sort_by_angle;
use super::status::SweepStatus;

/// A provider of visibility answers for one query point at a time.
pub trait VisibilityOracle {
    /// Obstacle vertices visible from `p` (never `p` itself).
    fn visible_from(&self, p: Point, set: &ObstacleSet<'_>) -> Vec<Point>;

    fn name(&self) -> &'static str;
}

/// `w` is blocked by its own obstacle as seen from `p`.
///
/// True if `p–w` meets the owner's boundary anywhere but at `w`, or if `p` is
/// a non-adjacent vertex of the same obstacle and `p–w` is an interior diagonal.
pub fn hidden_by_owner(p: Point, w: Point, set: &ObstacleSet<'_>) -> bool {
    let Some(owner) = set.owner_of(w) else {
        return false;
    };
    let sight = Segment::new(p, w);
    if owner
        .edges()
        .any(|e| !e.has_endpoint(w) && segment_hits(&sight, &e))
    {
        return true;
    }
    owner.index_of(p).is_some()
        && !owner.are_adjacent(p, w)
        && owner.contains(nalgebra::center(&p, &w))
}

/// Brute-force line of sight from `p` to `w`: not hidden by `w`'s owner and
/// crossing or touching no obstacle edge.
pub fn sightline_clear(p: Point, w: Point, set: &ObstacleSet<'_>) -> bool {
    if p == w || hidden_by_owner(p, w, set) {
        return false;
    }
    !set.edges().any(|e| segments_intersect(p, w, e.start, e.end))
}

/// Obstacle vertices other than `p`, first occurrence of each coordinate.
fn candidates(p: Point, set: &ObstacleSet<'_>) -> Vec<Point> {
    let mut seen = HashSet::new();
    set.vertices()
        .filter(|&v| v != p && seen.insert(PointKey::from(v)))
        .collect()
}

/// Pairwise test of every candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveOracle;

impl VisibilityOracle for NaiveOracle {
    fn visible_from(&self, p: Point, set: &ObstacleSet<'_>) -> Vec<Point> {
        candidates(p, set)
            .into_iter()
            .filter(|&w| sightline_clear(p, w, set))
            .collect()
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

/// Rotational sweep around the query point.
#[derive(Clone, Copy, Debug, Default)]
pub struct SweepOracle {
    cfg: GeomCfg,
}

impl SweepOracle {
    pub fn new(cfg: GeomCfg) -> Self {
        Self { cfg }
    }

    /// Status for the reference ray `p + t·(1, 0)`: every edge not incident
    /// to `p` that the ray crosses at an interior point.
    pub fn initial_status(&self, p: Point, set: &ObstacleSet<'_>) -> SweepStatus {
        let dir = Vector::new(1.0, 0.0);
        let mut status = SweepStatus::new(p, self.cfg);
        for e in set.edges() {
            if e.has_endpoint(p) {
                continue;
            }
            let straddles = (e.start.y > p.y && e.end.y < p.y) || (e.start.y < p.y && e.end.y > p.y);
            if !straddles {
                continue;
            }
            if let Some((t, _)) = ray_params(p, dir, e.start, e.end, self.cfg.eps_parallel) {
                if t > 0.0 {
                    status.insert(e, dir);
                }
            }
        }
        status
    }

    /// Sweep from a prepared initial status.
    pub fn sweep(&self, p: Point, set: &ObstacleSet<'_>, mut status: SweepStatus) -> Vec<Point> {
        let order = sort_by_angle(p, candidates(p, set), self.cfg.eps_angle);
        let mut visible = Vec::new();
        let mut prev: Option<(Point, bool)> = None;

        for w in order {
            let dir = w - p;
            let seen = self.classify(p, w, prev, &status, dir, set);
            if seen {
                visible.push(w);
            }
            trace!(x = w.x, y = w.y, seen, status = status.len(), "sweep event");

            if let Some((a, b)) = set.neighbors(w) {
                let turns = [(a, cross(p, w, a)), (b, cross(p, w, b))];
                for &(n, c) in &turns {
                    if c > 0.0 {
                        status.remove(&Segment::new(w, n));
                    }
                }
                for &(n, c) in &turns {
                    if c < 0.0 {
                        status.insert(Segment::new(w, n), dir);
                    }
                }
            }
            prev = Some((w, seen));
        }
        visible
    }

    fn classify(
        &self,
        p: Point,
        w: Point,
        prev: Option<(Point, bool)>,
        status: &SweepStatus,
        dir: Vector,
        set: &ObstacleSet<'_>,
    ) -> bool {
        if hidden_by_owner(p, w, set) {
            return false;
        }
        match prev {
            Some((q, q_seen)) if point_on_segment(q, p, w) => {
                q_seen && status.between(q, w, dir).is_empty()
            }
            _ => status
                .nearest()
                .map_or(true, |e| !segments_intersect(p, w, e.start, e.end)),
        }
    }
}

impl VisibilityOracle for SweepOracle {
    fn visible_from(&self, p: Point, set: &ObstacleSet<'_>) -> Vec<Point> {
        let status = self.initial_status(p, set);
        self.sweep(p, set, status)
    }

    fn name(&self) -> &'static str {
        "sweep"
    }
}

/// Sweep with a brute-force safety net.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoOracle {
    sweep: SweepOracle,
}

impl AutoOracle {
    pub fn new(cfg: GeomCfg) -> Self {
        Self {
            sweep: SweepOracle::new(cfg),
        }
    }
}

impl VisibilityOracle for AutoOracle {
    fn visible_from(&self, p: Point, set: &ObstacleSet<'_>) -> Vec<Point> {
        if set.owners().is_ambiguous() {
            debug!(x = p.x, y = p.y, "ambiguous ownership, brute-force visibility");
            return NaiveOracle.visible_from(p, set);
        }
        let status = self.sweep.initial_status(p, set);
        if status.is_empty() {
            debug!(x = p.x, y = p.y, "reference ray crosses no edge, brute-force visibility");
            return NaiveOracle.visible_from(p, set);
        }
        self.sweep.sweep(p, set, status)
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}
