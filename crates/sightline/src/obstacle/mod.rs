//! Obstacle model: validated simple polygons, vertex ownership, random generation.
//!
//! - `Obstacle` owns its vertex ring and never changes shape after
//!   construction; the only mutation is a rigid translation.
//! - `ObstacleSet` borrows a scene's obstacles and answers the two lookups
//!   the sweep needs per vertex: which obstacle owns it, and its ring
//!   neighbours.

mod owners;
mod polygon;
pub mod rand;

pub use owners::{ObstacleSet, OwnerMap, VertexRef};
pub use polygon::Obstacle;
pub use self::rand::{random_obstacle, random_obstacle_replay, ObstacleBox, ReplayToken};
