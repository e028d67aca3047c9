use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use sightline::error::{PathError, SceneError};
use sightline::obstacle::ReplayToken;
use sightline::scene::{random_scene, Scene};
use sightline::visibility::{OracleKind, VisCfg};
use sightline::Point;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod output;
mod parse;
mod provenance;

use output::SolveReport;
use parse::{format_obstacles, parse_obstacles, parse_point};

#[derive(Parser)]
#[command(name = "sightline")]
#[command(about = "Shortest paths around polygonal obstacles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OracleArg {
    Auto,
    Sweep,
    Naive,
}

impl From<OracleArg> for OracleKind {
    fn from(a: OracleArg) -> Self {
        match a {
            OracleArg::Auto => OracleKind::Auto,
            OracleArg::Sweep => OracleKind::Sweep,
            OracleArg::Naive => OracleKind::Naive,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Solve a scene read from an obstacle file and print or write the JSON report
    Solve {
        /// `x,y` per line, blank line between obstacles
        #[arg(long)]
        obstacles: PathBuf,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        source: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        target: Point,
        #[arg(long, value_enum, default_value_t = OracleArg::Auto)]
        oracle: OracleArg,
        /// Write the report here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit the two-triangle demo scene in the obstacle file format
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            obstacles,
            source,
            target,
            oracle,
            out,
        } => {
            let report = solve(&obstacles, source, target, oracle.into())?;
            let text = serde_json::to_string_pretty(&report)?;
            match out {
                Some(out) => {
                    write_artifact(&out, &text)?;
                    provenance::write_sidecar(
                        &out,
                        provenance::Payload::new(
                            "solve",
                            json!({
                                "obstacles": obstacles,
                                "source": report.source,
                                "target": report.target,
                                "oracle": report.oracle,
                            }),
                        ),
                    )?;
                }
                None => println!("{text}"),
            }
            Ok(())
        }
        Action::Random { seed, index, out } => random(seed, index, out.as_deref()),
        Action::Report => report(),
    }
}

fn solve(obstacles: &Path, source: Point, target: Point, oracle: OracleKind) -> Result<SolveReport> {
    let text = std::fs::read_to_string(obstacles)
        .with_context(|| format!("reading {}", obstacles.display()))?;
    let parsed = parse_obstacles(&text).with_context(|| format!("parsing {}", obstacles.display()))?;
    tracing::info!(obstacles = parsed.len(), oracle = ?oracle, "solve");

    let mut scene = Scene::new(source, target).with_cfg(VisCfg::with_oracle(oracle));
    scene.add_obstacles(parsed);
    match scene.find_shortest_path() {
        Ok(path) => tracing::info!(length = path.length(), points = path.len(), "solved"),
        Err(SceneError::Path(PathError::Unreachable)) => tracing::warn!("target unreachable"),
        Err(e) => return Err(e.into()),
    }
    SolveReport::from_scene(&scene).context("scene has no solution after solving")
}

fn random(seed: u64, index: u64, out: Option<&Path>) -> Result<()> {
    let scene = random_scene(ReplayToken::new(seed, index))?;
    let text = format_obstacles(scene.obstacles());
    tracing::info!(
        seed,
        index,
        source = ?scene.source(),
        target = ?scene.target(),
        "demo scene"
    );
    match out {
        Some(out) => {
            write_artifact(out, &text)?;
            provenance::write_sidecar(
                out,
                provenance::Payload::new("random", json!({ "seed": seed, "index": index })),
            )?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block("report", json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_artifact(out: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, contents).with_context(|| format!("writing {}", out.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn solve_reads_the_obstacle_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scene.txt");
        std::fs::write(&file, "4,-1\n6,-1\n5,2\n").unwrap();
        let report = solve(&file, Point::new(0.0, 0.0), Point::new(10.0, 0.0), OracleKind::Auto)
            .unwrap();
        assert_eq!(report.obstacles, 1);
        assert_eq!(
            report.path.unwrap(),
            vec![[0.0, 0.0], [4.0, -1.0], [6.0, -1.0], [10.0, 0.0]]
        );
        assert!((report.length.unwrap() - (2.0 * 17f64.sqrt() + 2.0)).abs() < 1e-12);
        assert_eq!(report.graph.nodes, 5);
        assert_eq!(report.oracle, "auto");
    }

    #[test]
    fn random_scene_file_parses_back() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("demo.txt");
        random(5, 1, Some(out.as_path())).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let obstacles = parse_obstacles(&text).unwrap();
        assert_eq!(obstacles.len(), 2);
        assert!(dir.path().join("nested").join("demo.provenance.json").exists());

        let report = solve(&out, Point::new(100.0, 100.0), Point::new(200.0, 200.0), OracleKind::Naive)
            .unwrap();
        assert!(report.length.unwrap() >= 100.0 * 2f64.sqrt() - 1e-9);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = solve(&dir.path().join("nope.txt"), Point::origin(), Point::origin(), OracleKind::Auto)
            .unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }

    #[test]
    fn cli_parses_negative_points() {
        let cmd = Cmd::try_parse_from([
            "sightline", "solve", "--obstacles", "x.txt", "--source", "-5,0", "--target", "3,-2",
            "--oracle", "sweep",
        ])
        .unwrap();
        match cmd.action {
            Action::Solve { source, target, oracle, .. } => {
                assert_eq!(source, Point::new(-5.0, 0.0));
                assert_eq!(target, Point::new(3.0, -2.0));
                assert!(matches!(oracle, OracleArg::Sweep));
            }
            _ => panic!("expected solve"),
        }
    }
}
