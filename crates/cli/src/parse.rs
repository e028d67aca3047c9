//! Plain-text obstacle format.
//!
//! One `x,y` vertex per line; a blank line closes the current obstacle.
//! Lines without exactly two comma-separated fields are skipped. A field that
//! is not a number is an error carrying its 1-based line number.

use anyhow::{anyhow, bail, Context, Result};
use sightline::obstacle::Obstacle;
use sightline::Point;

/// Parse `"x,y"` (whitespace around either number is fine).
pub fn parse_point(s: &str) -> Result<Point> {
    let fields: Vec<&str> = s.split(',').collect();
    if fields.len() != 2 {
        bail!("expected `x,y`, got {s:?}");
    }
    let x = parse_coord(fields[0])?;
    let y = parse_coord(fields[1])?;
    Ok(Point::new(x, y))
}

fn parse_coord(field: &str) -> Result<f64> {
    let v: f64 = field
        .trim()
        .parse()
        .with_context(|| format!("not a number: {:?}", field.trim()))?;
    if !v.is_finite() {
        return Err(anyhow!("non-finite coordinate {v}"));
    }
    Ok(v)
}

/// Vertex rings as written, before obstacle validation.
pub fn parse_rings(input: &str) -> Result<Vec<Vec<Point>>> {
    let mut rings = Vec::new();
    let mut ring = Vec::new();
    for (i, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            if !ring.is_empty() {
                rings.push(std::mem::take(&mut ring));
            }
            continue;
        }
        if line.split(',').count() != 2 {
            tracing::debug!(line = i + 1, "skipping line without two fields");
            continue;
        }
        ring.push(parse_point(line).with_context(|| format!("line {}", i + 1))?);
    }
    if !ring.is_empty() {
        rings.push(ring);
    }
    Ok(rings)
}

/// Parse and validate every obstacle.
pub fn parse_obstacles(input: &str) -> Result<Vec<Obstacle>> {
    parse_rings(input)?
        .into_iter()
        .enumerate()
        .map(|(k, ring)| Obstacle::new(ring).with_context(|| format!("obstacle {k}")))
        .collect()
}

/// Inverse of [`parse_obstacles`].
pub fn format_obstacles(obstacles: &[Obstacle]) -> String {
    let blocks: Vec<String> = obstacles
        .iter()
        .map(|o| {
            o.vertices()
                .iter()
                .map(|v| format!("{},{}\n", v.x, v.y))
                .collect()
        })
        .collect();
    blocks.join("\n")
}
