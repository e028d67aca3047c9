//! Rotation order of the sweep ray.

use crate::geom2::{angle, distance, Point};

/// Sort `vertices` by polar angle about `p`; angles within `eps` of each other
/// are ordered nearest first.
///
/// Near-equal angles are grouped by chaining consecutive gaps below `eps`, so
/// the comparator handed to the sort stays a total order.
pub fn sort_by_angle<I>(p: Point, vertices: I, eps: f64) -> Vec<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut keyed: Vec<(f64, f64, Point)> = vertices
        .into_iter()
        .map(|v| (angle(p, v), distance(p, v), v))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut start = 0;
    while start < keyed.len() {
        let mut end = start + 1;
        while end < keyed.len() && keyed[end].0 - keyed[end - 1].0 < eps {
            end += 1;
        }
        if end - start > 1 {
            keyed[start..end].sort_by(|a, b| a.1.total_cmp(&b.1));
        }
        start = end;
    }
    keyed.into_iter().map(|(_, _, v)| v).collect()
}
