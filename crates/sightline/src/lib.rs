//! Euclidean shortest paths amid polygonal obstacles.
//!
//! Pipeline
//! - `obstacle`: validated simple polygons and the vertex → owner lookup.
//! - `visibility`: rotational-sweep oracle and the visibility graph over
//!   obstacle vertices plus source and target.
//! - `path`: Dijkstra over that graph with Euclidean weights.
//! - `scene`: the mutable container tying the steps together.
//!
//! API Policy
//! - `api` and `prelude` hold the curated surface. Module paths may move.

pub mod api;
pub mod error;
pub mod geom2;
pub mod obstacle;
pub mod path;
pub mod scene;
pub mod visibility;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom2::{GeomCfg, Point, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{GeomCfg, Point, Segment, Vector};
    pub use crate::obstacle::{random_obstacle, Obstacle, ObstacleBox, ReplayToken};
    pub use crate::path::ShortestPath;
    pub use crate::scene::{random_scene, Scene};
    pub use crate::visibility::{OracleKind, VisCfg, VisibilityGraph};
}
