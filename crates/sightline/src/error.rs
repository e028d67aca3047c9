//! Error taxonomy for scene construction and path queries.
//!
//! Geometric predicates never fail; they answer `bool`/`Option`. Errors only
//! surface where a caller handed us something we refuse to model (a malformed
//! obstacle) or asked a question without an answer (an unreachable target).

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Obstacle(#[from] ObstacleError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Rejected obstacle input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObstacleError {
    #[error("obstacle needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("vertex {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("vertex {index} repeats its predecessor")]
    RepeatedVertex { index: usize },

    #[error("degenerate obstacle: signed area {area:e}")]
    Degenerate { area: f64 },

    #[error("invalid bounding box: min ({min_x}, {min_y}), max ({max_x}, {max_y})")]
    InvalidBox {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
}

/// Shortest-path query failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("target is not reachable from source")]
    Unreachable,

    #[error("{0} is not a vertex of the visibility graph")]
    UnknownEndpoint(&'static str),
}

/// Scene-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("source and target must be set before solving")]
    MissingEndpoints,

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
