//! Exact-input geometric predicates.
//!
//! No predicate here applies a tolerance to coordinates: collinearity is
//! `cross == 0.0`. The only epsilon is the parallel test in the ray solve,
//! which guards a division.

use std::f64::consts::TAU;

use super::types::{Point, Segment, Vector};

/// Twice the signed area of the triangle `a, b, c`.
///
/// Negative when `a → b → c` turns left (counter-clockwise in a y-up frame),
/// positive for a right turn, zero when collinear.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.y - a.y) * (c.x - a.x) - (b.x - a.x) * (c.y - a.y)
}

/// `c` lies in the closed axis-aligned box spanned by `a` and `b`.
#[inline]
fn in_box(a: Point, b: Point, c: Point) -> bool {
    a.x.min(b.x) <= c.x && c.x <= a.x.max(b.x) && a.y.min(b.y) <= c.y && c.y <= a.y.max(b.y)
}

/// Segment `p1 q1` meets segment `p2 q2`.
///
/// Proper crossings count. So does a boundary touch: an endpoint of one
/// segment lying on the other, unless that endpoint is also an endpoint of
/// the other segment. Two segments that only share an endpoint do not
/// intersect; a sightline that grazes an obstacle vertex does.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let d1 = cross(p2, q2, p1);
    let d2 = cross(p2, q2, q1);
    let d3 = cross(p1, q1, p2);
    let d4 = cross(p1, q1, q2);

    if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
        return true;
    }

    (d1 == 0.0 && p1 != p2 && p1 != q2 && in_box(p2, q2, p1))
        || (d2 == 0.0 && q1 != p2 && q1 != q2 && in_box(p2, q2, q1))
        || (d3 == 0.0 && p2 != p1 && p2 != q1 && in_box(p1, q1, p2))
        || (d4 == 0.0 && q2 != p1 && q2 != q1 && in_box(p1, q1, q2))
}

/// [`segments_intersect`] on two [`Segment`]s.
#[inline]
pub fn segment_hits(a: &Segment, b: &Segment) -> bool {
    segments_intersect(a.start, a.end, b.start, b.end)
}

/// `p` lies on the closed segment `a b`, exactly.
#[inline]
pub fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    in_box(a, b, p) && cross(a, b, p) == 0.0
}

/// Polar angle of `q - p`, in `[0, 2π)`.
#[inline]
pub fn angle(p: Point, q: Point) -> f64 {
    let a = (q.y - p.y).atan2(q.x - p.x);
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Euclidean distance.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    nalgebra::distance(&p, &q)
}

/// Solve `p + t·dir = a + u·(b − a)` for `(t, u)`.
///
/// `None` when the ray and the segment are parallel within `eps`.
pub(crate) fn ray_params(p: Point, dir: Vector, a: Point, b: Point, eps: f64) -> Option<(f64, f64)> {
    let s = b - a;
    let qp = a - p;
    let det = dir.x * s.y - dir.y * s.x;
    if det.abs() < eps {
        return None;
    }
    let t = (qp.x * s.y - qp.y * s.x) / det;
    let u = (qp.x * dir.y - qp.y * dir.x) / det;
    Some((t, u))
}

/// Where the ray `p + t·dir` (`t ≥ 0`) hits segment `a b`, if it does.
///
/// Parallel rays (determinant below `eps`) never hit.
pub fn ray_intersect(p: Point, dir: Vector, a: Point, b: Point, eps: f64) -> Option<Point> {
    let (t, u) = ray_params(p, dir, a, b, eps)?;
    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(p + dir * t)
    } else {
        None
    }
}
