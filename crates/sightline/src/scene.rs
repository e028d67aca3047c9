//! Mutable scene: obstacles, endpoints and the last solve.
//!
//! Every mutation drops the cached [`Solution`]; a solve always rebuilds the
//! visibility graph from scratch.

use tracing::{debug, info};

use crate::error::{ObstacleError, SceneError};
use crate::geom2::{Point, Vector};
use crate::obstacle::{random_obstacle, Obstacle, ObstacleBox, ReplayToken};
use crate::path::{shortest_path, ShortestPath};
use crate::visibility::{build_visibility_graph, VisCfg, VisibilityGraph};

/// Result of the last solve. The graph is kept even when no path exists.
#[derive(Clone, Debug)]
pub struct Solution {
    pub graph: VisibilityGraph,
    pub path: Option<ShortestPath>,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    obstacles: Vec<Obstacle>,
    source: Option<Point>,
    target: Option<Point>,
    cfg: VisCfg,
    solution: Option<Solution>,
}

impl Scene {
    pub fn new(source: Point, target: Point) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_cfg(mut self, cfg: VisCfg) -> Self {
        self.cfg = cfg;
        self.solution = None;
        self
    }

    #[inline]
    pub fn cfg(&self) -> &VisCfg {
        &self.cfg
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
        self.solution = None;
    }

    pub fn add_obstacles<I: IntoIterator<Item = Obstacle>>(&mut self, obstacles: I) {
        self.obstacles.extend(obstacles);
        self.solution = None;
    }

    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
        self.solution = None;
    }

    pub fn set_endpoints(&mut self, source: Point, target: Point) {
        self.source = Some(source);
        self.target = Some(target);
        self.solution = None;
    }

    /// Drop obstacles, endpoints and the last solution. The configuration stays.
    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.source = None;
        self.target = None;
        self.solution = None;
    }

    /// Shift every obstacle by `by`. Endpoints stay put.
    pub fn translate_obstacles(&mut self, by: Vector) {
        for o in &mut self.obstacles {
            o.translate(by);
        }
        self.solution = None;
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn source(&self) -> Option<Point> {
        self.source
    }

    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn visibility_graph(&self) -> Option<&VisibilityGraph> {
        self.solution.as_ref().map(|s| &s.graph)
    }

    pub fn path(&self) -> Option<&ShortestPath> {
        self.solution.as_ref().and_then(|s| s.path.as_ref())
    }

    /// Rebuild the visibility graph and search it.
    ///
    /// An unreachable target still leaves the graph in [`Scene::solution`].
    pub fn find_shortest_path(&mut self) -> Result<&ShortestPath, SceneError> {
        let (Some(source), Some(target)) = (self.source, self.target) else {
            return Err(SceneError::MissingEndpoints);
        };
        debug!(obstacles = self.obstacles.len(), oracle = ?self.cfg.oracle, "solving scene");
        let graph = build_visibility_graph(&self.obstacles, source, target, &self.cfg);
        let solution = self.solution.insert(Solution { graph, path: None });
        let path = shortest_path(&solution.graph)?;
        info!(points = path.len(), length = path.length(), "path found");
        Ok(&*solution.path.insert(path))
    }
}

/// Demo layout: S = (100, 100), T = (200, 200), one random triangle in
/// [-90, -30]² and one in [40, 80]², both shifted by (200, 200).
pub fn random_scene(tok: ReplayToken) -> Result<Scene, ObstacleError> {
    let shift = Vector::new(200.0, 200.0);
    let boxes = [
        ObstacleBox::new(-90.0, -90.0, -30.0, -30.0)?,
        ObstacleBox::new(40.0, 40.0, 80.0, 80.0)?,
    ];
    let mut rng = tok.to_std_rng();
    let mut scene = Scene::new(Point::new(100.0, 100.0), Point::new(200.0, 200.0));
    for bbox in &boxes {
        scene.add_obstacle(random_obstacle(3, bbox, &mut rng)?.translated(shift));
    }
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PathError;
    use crate::geom2::{distance, PointKey};
    use crate::visibility::OracleKind;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn triangle_scene() -> Scene {
        let mut scene = Scene::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        scene.add_obstacle(
            Obstacle::from_coords(&[(4.0, -1.0), (6.0, -1.0), (5.0, 2.0)]).unwrap(),
        );
        scene
    }

    #[test]
    fn solve_and_invalidate() {
        let mut scene = triangle_scene();
        assert!(scene.solution().is_none());
        let len = scene.find_shortest_path().unwrap().length();
        assert!(len > 10.0);
        assert!(scene.visibility_graph().is_some());

        scene.clear_obstacles();
        assert!(scene.solution().is_none());
        let path = scene.find_shortest_path().unwrap();
        assert_eq!(path.points(), &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(path.length(), 10.0);
    }

    #[test]
    fn missing_endpoints() {
        let mut scene = triangle_scene();
        scene.clear();
        assert!(scene.obstacles().is_empty());
        assert_eq!(scene.find_shortest_path().err(), Some(SceneError::MissingEndpoints));
        scene.set_endpoints(Point::new(1.0, 1.0), Point::new(1.0, 1.0));
        assert_eq!(scene.find_shortest_path().unwrap().len(), 1);
    }

    #[test]
    fn enclosed_target_keeps_the_graph() {
        // T sits inside four walls meeting at shared corners; every sightline
        // out of the box crosses or grazes a wall.
        let mut scene = Scene::new(Point::new(-5.0, 0.0), Point::new(0.0, 0.0));
        scene.add_obstacles([
            Obstacle::from_coords(&[(-2.0, -2.0), (2.0, -2.0), (2.0, -1.5), (-2.0, -1.5)]).unwrap(),
            Obstacle::from_coords(&[(2.0, -1.5), (2.0, 2.0), (1.5, 2.0), (1.5, -1.5)]).unwrap(),
            Obstacle::from_coords(&[(-2.0, 1.5), (1.5, 1.5), (1.5, 2.0), (-2.0, 2.0)]).unwrap(),
            Obstacle::from_coords(&[(-2.0, -1.5), (-1.5, -1.5), (-1.5, 1.5), (-2.0, 1.5)]).unwrap(),
        ]);
        let err = scene.find_shortest_path().unwrap_err();
        assert_eq!(err, SceneError::Path(PathError::Unreachable));
        let sol = scene.solution().unwrap();
        assert!(sol.path.is_none());
        let g = &sol.graph;
        assert_eq!(g.neighbors(g.target()).count(), 0);
        assert!(g.neighbors(g.source()).count() > 0);
    }

    #[test]
    fn solving_twice_is_bit_identical() {
        let mut scene = random_scene(ReplayToken::new(3, 0)).unwrap();
        let a = scene.find_shortest_path().unwrap().clone();
        let b = scene.find_shortest_path().unwrap().clone();
        assert_eq!(a.length().to_bits(), b.length().to_bits());
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn oracle_choice_does_not_change_the_answer() {
        let base = random_scene(ReplayToken::new(11, 4)).unwrap();
        let mut lengths = Vec::new();
        for kind in [OracleKind::Auto, OracleKind::Sweep, OracleKind::Naive] {
            let mut scene = base.clone().with_cfg(VisCfg::with_oracle(kind));
            lengths.push(scene.find_shortest_path().unwrap().length());
        }
        assert!((lengths[0] - lengths[1]).abs() < 1e-9);
        assert!((lengths[0] - lengths[2]).abs() < 1e-9);
    }

    #[test]
    fn translation_invalidates() {
        let mut scene = triangle_scene();
        scene.find_shortest_path().unwrap();
        scene.translate_obstacles(Vector::new(0.0, 100.0));
        assert!(scene.solution().is_none());
        assert_eq!(scene.find_shortest_path().unwrap().len(), 2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn demo_scene_end_to_end(seed in any::<u64>(), index in 0u64..4) {
            let mut scene = random_scene(ReplayToken::new(seed, index)).unwrap();
            let vertices: HashSet<PointKey> = scene
                .obstacles()
                .iter()
                .flat_map(|o| o.vertices().iter().map(PointKey::from))
                .collect();
            let s = Point::new(100.0, 100.0);
            let t = Point::new(200.0, 200.0);
            let path = scene.find_shortest_path().unwrap().clone();
            let pts = path.points();
            prop_assert!(pts.len() >= 2);
            prop_assert_eq!(pts[0], s);
            prop_assert_eq!(pts[pts.len() - 1], t);
            prop_assert!(path.length() >= distance(s, t) - 1e-9);
            for p in &pts[1..pts.len() - 1] {
                prop_assert!(vertices.contains(&PointKey::from(p)));
            }
        }
    }
}
