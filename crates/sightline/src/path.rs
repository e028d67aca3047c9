//! Dijkstra over a visibility graph with Euclidean edge weights.
//!
//! Lazy deletion: a node may sit in the heap several times; entries whose key
//! no longer matches the best known distance are skipped on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::PathError;
use crate::geom2::{distance, Point};
use crate::visibility::{NodeId, VisibilityGraph};

/// A shortest path from source to target, both inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    nodes: Vec<NodeId>,
    points: Vec<Point>,
    length: f64,
}

impl ShortestPath {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of Euclidean segment lengths.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of points on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct HeapEntry {
    dist: f64,
    node: NodeId,
}

impl Eq for HeapEntry {}

// Reversed so the std max-heap pops the smallest distance; ties go to the
// lower node id.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path between the graph's own source and target.
pub fn shortest_path(g: &VisibilityGraph) -> Result<ShortestPath, PathError> {
    dijkstra(g, g.source(), g.target())
}

/// Shortest path between two points that are nodes of `g`.
pub fn shortest_path_between(
    g: &VisibilityGraph,
    from: Point,
    to: Point,
) -> Result<ShortestPath, PathError> {
    let s = g.node_id(from).ok_or(PathError::UnknownEndpoint("source"))?;
    let t = g.node_id(to).ok_or(PathError::UnknownEndpoint("target"))?;
    dijkstra(g, s, t)
}

fn dijkstra(g: &VisibilityGraph, s: NodeId, t: NodeId) -> Result<ShortestPath, PathError> {
    let n = g.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut pred: Vec<Option<NodeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[s.index()] = 0.0;
    heap.push(HeapEntry { dist: 0.0, node: s });

    while let Some(HeapEntry { dist: d, node: v }) = heap.pop() {
        if d > dist[v.index()] {
            continue;
        }
        if v == t {
            break;
        }
        let pv = g.point(v);
        for u in g.neighbors(v) {
            let nd = d + distance(pv, g.point(u));
            if nd < dist[u.index()] {
                dist[u.index()] = nd;
                pred[u.index()] = Some(v);
                heap.push(HeapEntry { dist: nd, node: u });
            }
        }
    }

    let length = dist[t.index()];
    if !length.is_finite() {
        debug!(nodes = n, "target unreachable");
        return Err(PathError::Unreachable);
    }

    // A simple path visits each node at most once.
    let mut nodes = vec![t];
    let mut cur = t;
    while cur != s {
        if nodes.len() > n {
            return Err(PathError::Unreachable);
        }
        cur = pred[cur.index()].ok_or(PathError::Unreachable)?;
        nodes.push(cur);
    }
    nodes.reverse();
    let points = nodes.iter().map(|&id| g.point(id)).collect();
    debug!(hops = nodes.len() - 1, length, "shortest path found");
    Ok(ShortestPath {
        nodes,
        points,
        length,
    })
}
