//! Random simple obstacles for demos, benches and property tests.
//!
//! Model
//! - Draw `n` points uniformly in an axis-aligned box, then order them by polar
//!   angle about their vertex average. The centre lies inside the hull of the
//!   points, so the ring is star-shaped around it and therefore simple.
//! - Randomness is always passed in. `ReplayToken` turns `(seed, index)` into a
//!   fresh `StdRng`, so a demo scene can be regenerated exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ObstacleError;
use crate::geom2::{Point, Vector};

use super::polygon::Obstacle;

/// Axis-aligned sampling box with `min < max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleBox {
    min: Point,
    max: Point,
}

impl ObstacleBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, ObstacleError> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || min_x >= max_x || min_y >= max_y {
            return Err(ObstacleError::InvalidBox {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        })
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// The same box shifted by `by`.
    pub fn translated(&self, by: Vector) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random simple polygon with `num_points` vertices inside `bbox`.
///
/// Errors if `num_points < 3`, or in the measure-zero event that the draw is
/// degenerate (coincident or collinear points).
pub fn random_obstacle<R: Rng + ?Sized>(
    num_points: usize,
    bbox: &ObstacleBox,
    rng: &mut R,
) -> Result<Obstacle, ObstacleError> {
    if num_points < 3 {
        return Err(ObstacleError::TooFewVertices(num_points));
    }
    let points: Vec<Point> = (0..num_points)
        .map(|_| {
            Point::new(
                rng.gen_range(bbox.min.x..bbox.max.x),
                rng.gen_range(bbox.min.y..bbox.max.y),
            )
        })
        .collect();
    let centre = points.iter().fold(Vector::zeros(), |acc, p| acc + p.coords) / num_points as f64;
    let mut keyed: Vec<(f64, Point)> = points
        .into_iter()
        .map(|p| ((p.y - centre.y).atan2(p.x - centre.x), p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    Obstacle::new(keyed.into_iter().map(|(_, p)| p).collect())
}

/// [`random_obstacle`] driven by a replay token.
pub fn random_obstacle_replay(
    num_points: usize,
    bbox: &ObstacleBox,
    tok: ReplayToken,
) -> Result<Obstacle, ObstacleError> {
    random_obstacle(num_points, bbox, &mut tok.to_std_rng())
}
