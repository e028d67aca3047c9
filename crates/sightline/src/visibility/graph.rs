//! Visibility graph and its builder.
//!
//! Nodes are interned input points (source, target, obstacle vertices) with
//! dense ids in insertion order. Edges are undirected and stored in ordered
//! neighbour sets, so iteration order never depends on hashing.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::geom2::{Point, PointKey};
use crate::obstacle::{Obstacle, ObstacleSet};

use super::oracle::{sightline_clear, VisibilityOracle};
use super::VisCfg;

/// Dense node index into a [`VisibilityGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Undirected visibility graph over exact input points.
#[derive(Clone, Debug)]
pub struct VisibilityGraph {
    nodes: Vec<Point>,
    index: HashMap<PointKey, NodeId>,
    adj: Vec<BTreeSet<NodeId>>,
    source: NodeId,
    target: NodeId,
}

impl VisibilityGraph {
    /// Empty graph holding only the two endpoints. Equal endpoints share a node.
    pub fn new(source: Point, target: Point) -> Self {
        let mut g = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adj: Vec::new(),
            source: NodeId(0),
            target: NodeId(0),
        };
        g.source = g.add_node(source);
        g.target = g.add_node(target);
        g
    }

    /// Intern `p`, returning the existing id when the coordinates are already known.
    pub fn add_node(&mut self, p: Point) -> NodeId {
        if let Some(&id) = self.index.get(&PointKey::from(p)) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(p);
        self.adj.push(BTreeSet::new());
        self.index.insert(PointKey::from(p), id);
        id
    }

    #[inline]
    pub fn node_id(&self, p: Point) -> Option<NodeId> {
        self.index.get(&PointKey::from(p)).copied()
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        self.nodes[id.0]
    }

    pub fn points(&self) -> &[Point] {
        &self.nodes
    }

    /// Connect `a` and `b` both ways. Self-loops are ignored.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        self.adj[a.0].insert(b);
        self.adj[b.0].insert(a);
    }

    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adj[id.0].iter().copied()
    }

    /// Neighbours of the node at `p`; `None` when `p` is not a node.
    pub fn neighbor_points(&self, p: Point) -> Option<Vec<Point>> {
        let id = self.node_id(p)?;
        Some(self.neighbors(id).map(|n| self.point(n)).collect())
    }

    pub fn contains_edge(&self, a: Point, b: Point) -> bool {
        match (self.node_id(a), self.node_id(b)) {
            (Some(a), Some(b)) => self.adj[a.0].contains(&b),
            _ => false,
        }
    }

    /// Every undirected edge once, lower id first.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adj.iter().enumerate().flat_map(|(a, set)| {
            set.range(NodeId(a + 1)..).map(move |&b| (NodeId(a), b))
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }
}

/// Build the visibility graph of `obstacles` plus `source` and `target`
/// with the oracle chosen by `cfg`.
pub fn build_visibility_graph(
    obstacles: &[Obstacle],
    source: Point,
    target: Point,
    cfg: &VisCfg,
) -> VisibilityGraph {
    let oracle = cfg.oracle.build(cfg.geom);
    build_with(oracle.as_ref(), obstacles, source, target)
}

/// Build with an explicit oracle.
///
/// - Every candidate (source, target, each obstacle vertex) is queried once;
///   answers are recorded both ways.
/// - The direct source–target sightline is tested by brute force, since
///   neither endpoint is an obstacle vertex an oracle would return.
/// - Boundary edges are always present.
pub fn build_with<O>(oracle: &O, obstacles: &[Obstacle], source: Point, target: Point) -> VisibilityGraph
where
    O: VisibilityOracle + ?Sized,
{
    let set = ObstacleSet::new(obstacles);
    if set.owners().is_ambiguous() {
        warn!("vertex coordinates shared between obstacles; ownership is last-write-wins");
    }

    let mut g = VisibilityGraph::new(source, target);
    for v in set.vertices() {
        g.add_node(v);
    }

    for from in 0..g.node_count() {
        let from = NodeId(from);
        let p = g.point(from);
        for w in oracle.visible_from(p, &set) {
            let to = g.add_node(w);
            g.add_edge(from, to);
        }
    }

    if g.source != g.target && sightline_clear(source, target, &set) {
        g.add_edge(g.source, g.target);
    }

    for e in set.edges() {
        let a = g.add_node(e.start);
        let b = g.add_node(e.end);
        g.add_edge(a, b);
    }

    debug!(
        oracle = oracle.name(),
        nodes = g.node_count(),
        edges = g.edge_count(),
        "visibility graph built"
    );
    g
}
