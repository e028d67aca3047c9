//! Point → owning-obstacle lookup over a borrowed obstacle slice.

use std::collections::HashMap;

use crate::geom2::{Point, PointKey, Segment};

use super::polygon::Obstacle;

/// Location of a vertex inside an obstacle slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexRef {
    pub obstacle: usize,
    pub index: usize,
}

/// Owner of every obstacle vertex, keyed by exact coordinates.
///
/// A coordinate that appears in several obstacles is recorded for the last
/// one (scene order) and the map is flagged as ambiguous.
#[derive(Clone, Debug, Default)]
pub struct OwnerMap {
    owners: HashMap<PointKey, VertexRef>,
    ambiguous: bool,
}

impl OwnerMap {
    pub fn new(obstacles: &[Obstacle]) -> Self {
        let mut owners = HashMap::new();
        let mut ambiguous = false;
        for (obstacle, o) in obstacles.iter().enumerate() {
            for (index, v) in o.vertices().iter().enumerate() {
                let prev = owners.insert(PointKey::from(v), VertexRef { obstacle, index });
                if prev.is_some_and(|r: VertexRef| r.obstacle != obstacle) {
                    ambiguous = true;
                }
            }
        }
        Self { owners, ambiguous }
    }

    #[inline]
    pub fn get(&self, p: Point) -> Option<VertexRef> {
        self.owners.get(&PointKey::from(p)).copied()
    }

    /// Some coordinate is shared by two obstacles.
    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Obstacle slice plus its owner map; the read-only input of every oracle query.
#[derive(Clone, Debug)]
pub struct ObstacleSet<'a> {
    obstacles: &'a [Obstacle],
    owners: OwnerMap,
}

impl<'a> ObstacleSet<'a> {
    pub fn new(obstacles: &'a [Obstacle]) -> Self {
        Self {
            obstacles,
            owners: OwnerMap::new(obstacles),
        }
    }

    #[inline]
    pub fn obstacles(&self) -> &'a [Obstacle] {
        self.obstacles
    }

    #[inline]
    pub fn owners(&self) -> &OwnerMap {
        &self.owners
    }

    /// Obstacle owning vertex `p`, if `p` is an obstacle vertex.
    #[inline]
    pub fn owner_of(&self, p: Point) -> Option<&'a Obstacle> {
        self.owners.get(p).map(|r| &self.obstacles[r.obstacle])
    }

    /// Ring predecessor and successor of vertex `p` in its owning obstacle.
    pub fn neighbors(&self, p: Point) -> Option<(Point, Point)> {
        let r = self.owners.get(p)?;
        Some(self.obstacles[r.obstacle].neighbors(r.index))
    }

    /// Every obstacle vertex in scene order (duplicates included).
    pub fn vertices(&self) -> impl Iterator<Item = Point> + 'a {
        let obstacles = self.obstacles;
        obstacles.iter().flat_map(|o| o.vertices().iter().copied())
    }

    /// Every obstacle edge in scene order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + 'a {
        let obstacles = self.obstacles;
        obstacles.iter().flat_map(|o| o.edges())
    }

    pub fn vertex_count(&self) -> usize {
        self.obstacles.iter().map(Obstacle::len).sum()
    }
}
