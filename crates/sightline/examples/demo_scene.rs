//! Solve the two-triangle demo scene and print the route.
//!
//! Usage:
//!   cargo run -p sightline --example demo_scene -- [seed]
//!
//! Prints the obstacles, the visibility graph size and the path with its
//! length. The same seed always gives the same scene.

use sightline::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let mut scene = match random_scene(ReplayToken::new(seed, 0)) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("demo scene: {e}");
            return;
        }
    };
    for (i, o) in scene.obstacles().iter().enumerate() {
        let coords: Vec<String> = o
            .vertices()
            .iter()
            .map(|v| format!("({:.2}, {:.2})", v.x, v.y))
            .collect();
        println!("obstacle {i}: {}", coords.join(" "));
    }
    match scene.find_shortest_path() {
        Ok(path) => {
            let hops: Vec<String> = path
                .points()
                .iter()
                .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
                .collect();
            println!("path: {}", hops.join(" -> "));
            println!("length: {:.4}", path.length());
        }
        Err(e) => println!("no path: {e}"),
    }
    if let Some(g) = scene.visibility_graph() {
        println!("graph: {} nodes, {} edges", g.node_count(), g.edge_count());
    }
}
