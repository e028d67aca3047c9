//! Curated API for front ends.
//!
//! Important
//! - A convenience surface: everything a caller needs to build a scene, solve
//!   it and inspect the result, without reaching into module paths.

// Primitives and predicates
pub use crate::geom2::{
    angle, cross, distance, point_on_segment, ray_intersect, segments_intersect, GeomCfg, Point,
    PointKey, Segment, Vector,
};
// Obstacles
pub use crate::obstacle::{
    random_obstacle, random_obstacle_replay, Obstacle, ObstacleBox, ObstacleSet, ReplayToken,
};
// Visibility
pub use crate::visibility::{
    build_visibility_graph, build_with, visible_vertices, AutoOracle, NaiveOracle, NodeId,
    OracleKind, SweepOracle, VisCfg, VisibilityGraph, VisibilityOracle,
};
// Paths and scenes
pub use crate::error::{Error, ObstacleError, PathError, SceneError};
pub use crate::path::{shortest_path, shortest_path_between, ShortestPath};
pub use crate::scene::{random_scene, Scene, Solution};
