//! Planar primitives for the visibility engine.
//!
//! Purpose
//! - Points, vectors and segments over `f64`, with nalgebra doing the
//!   arithmetic.
//! - The predicates every other module relies on: turn sign, segment
//!   intersection with boundary-touch semantics, point-on-segment, polar
//!   angle, distance and ray/segment intersection.
//!
//! Exactness
//! - Input coordinates are treated as exact. Points compare with `==`
//!   and key maps through [`PointKey`]; computed points are never keys.

mod predicates;
mod types;

pub use predicates::{
    angle, cross, distance, point_on_segment, ray_intersect, segment_hits, segments_intersect,
};
pub(crate) use predicates::ray_params;
pub use types::{GeomCfg, Point, PointKey, Segment, Vector};

#[cfg(test)]
mod tests;
