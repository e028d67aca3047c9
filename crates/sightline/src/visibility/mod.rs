//! Visibility: which input points see each other past the obstacles.
//!
//! Purpose
//! - Answer "what can `p` see" for any query point (`oracle`).
//! - Assemble those answers into the graph the path search runs on (`graph`).
//!
//! Why this design
//! - The rotational sweep visits vertices in polar order (`order`) and keeps the
//!   edges crossing the ray in a small sorted vector (`status`). Every status
//!   comparison takes the live ray direction as an argument; nothing caches a
//!   distance across events.
//! - Oracles sit behind one trait so the brute-force check doubles as a
//!   fallback and as the reference the sweep is tested against.
//!
//! References
//! - de Berg, Cheong, van Kreveld, Overmars: Computational Geometry, ch. 15.
//! - D. T. Lee, Proximity and reachability in the plane (1978).

mod graph;
mod oracle;
pub mod order;
mod status;

pub use graph::{build_visibility_graph, build_with, NodeId, VisibilityGraph};
pub use oracle::{
    hidden_by_owner, sightline_clear, AutoOracle, NaiveOracle, SweepOracle, VisibilityOracle,
};
pub use order::sort_by_angle;
pub use status::SweepStatus;

use crate::geom2::{GeomCfg, Point};
use crate::obstacle::{Obstacle, ObstacleSet};

/// Which oracle answers visibility queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OracleKind {
    /// Sweep, with the brute-force fallback for scenes it does not handle.
    #[default]
    Auto,
    Sweep,
    Naive,
}

impl OracleKind {
    pub fn build(self, geom: GeomCfg) -> Box<dyn VisibilityOracle> {
        match self {
            OracleKind::Auto => Box::new(AutoOracle::new(geom)),
            OracleKind::Sweep => Box::new(SweepOracle::new(geom)),
            OracleKind::Naive => Box::new(NaiveOracle),
        }
    }
}

/// Visibility configuration: tolerances plus oracle choice.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisCfg {
    pub geom: GeomCfg,
    pub oracle: OracleKind,
}

impl VisCfg {
    pub fn with_oracle(oracle: OracleKind) -> Self {
        Self {
            oracle,
            ..Self::default()
        }
    }
}

/// Obstacle vertices visible from `p`.
pub fn visible_vertices(p: Point, obstacles: &[Obstacle], cfg: &VisCfg) -> Vec<Point> {
    let set = ObstacleSet::new(obstacles);
    cfg.oracle.build(cfg.geom).visible_from(p, &set)
}
