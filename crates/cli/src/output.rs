//! JSON report of one solve.

use serde::{Deserialize, Serialize};
use sightline::scene::Scene;
use sightline::Point;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SolveReport {
    pub source: [f64; 2],
    pub target: [f64; 2],
    pub oracle: String,
    pub obstacles: usize,
    /// `None` when the target is unreachable.
    pub path: Option<Vec<[f64; 2]>>,
    pub length: Option<f64>,
    pub graph: GraphSummary,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: Vec<[[f64; 2]; 2]>,
}

#[inline]
fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

impl SolveReport {
    /// Summarize a solved scene; `None` if the scene was never solved.
    pub fn from_scene(scene: &Scene) -> Option<Self> {
        let solution = scene.solution()?;
        let g = &solution.graph;
        let edges = g
            .edges()
            .map(|(a, b)| [xy(g.point(a)), xy(g.point(b))])
            .collect();
        Some(Self {
            source: xy(g.point(g.source())),
            target: xy(g.point(g.target())),
            oracle: format!("{:?}", scene.cfg().oracle).to_lowercase(),
            obstacles: scene.obstacles().len(),
            path: solution
                .path
                .as_ref()
                .map(|p| p.points().iter().copied().map(xy).collect()),
            length: solution.path.as_ref().map(|p| p.length()),
            graph: GraphSummary {
                nodes: g.node_count(),
                edges,
            },
        })
    }
}
