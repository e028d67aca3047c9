//! Criterion microbenches for obstacle generation and the demo scene.
//!
//! - random_obstacle: 3, 8, 32 vertices.
//! - random_scene: build plus first solve.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sightline::obstacle::{random_obstacle, random_obstacle_replay, ObstacleBox, ReplayToken};
use sightline::scene::random_scene;

fn bench_random_obstacle(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_obstacle");
    let bbox = ObstacleBox::new(-90.0, -90.0, -30.0, -30.0).unwrap();
    for &n in &[3usize, 8, 32] {
        group.bench_with_input(BenchmarkId::new("rng", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| random_obstacle(n, &bbox, &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("replay", n), &n, |b, &n| {
            b.iter_batched(
                || ReplayToken::new(42, 0),
                |mut tok| {
                    tok = tok.next();
                    let _ = random_obstacle_replay(n, &bbox, tok);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_demo_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("demo_scene");
    group.bench_function(BenchmarkId::new("build_and_solve", "2x3"), |b| {
        b.iter_batched(
            || ReplayToken::new(7, 99),
            |tok| {
                let mut scene = random_scene(tok).unwrap();
                let _ = scene.find_shortest_path().map(|p| p.length());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_random_obstacle, bench_demo_scene);
criterion_main!(benches);
