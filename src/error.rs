//! Error types shared by search, closure building, and route optimization.

use thiserror::Error;

/// Structural failures surfaced to the caller unmodified.
///
/// Unreachable node pairs are not errors: they flow through
/// [`PathResult`](crate::search::PathResult) and the closure matrix as an
/// infinite distance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// A coordinate pair is missing a field or out of range.
    #[error("invalid point: {reason}")]
    InvalidPoint {
        /// What was wrong with the coordinates.
        reason: String,
    },

    /// A start, end, or target id is not a node of the graph.
    #[error("unknown node id `{0}`")]
    UnknownNode(String),

    /// Two nodes share an id while building a graph.
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),

    /// An edge distance is negative or not finite.
    #[error("edge {from} -> {to} has invalid distance {distance}")]
    InvalidEdge {
        /// Source node id.
        from: String,
        /// Destination node id.
        to: String,
        /// Offending distance.
        distance: f64,
    },

    /// A strategy was given fewer targets than it needs to run.
    #[error("{strategy} requires at least {required} targets, got {actual}")]
    DegenerateInput {
        /// Strategy that rejected the input.
        strategy: &'static str,
        /// Minimum number of targets the strategy accepts.
        required: usize,
        /// Number of targets supplied.
        actual: usize,
    },

    /// An exact strategy was asked to solve more targets than it can hold.
    #[error("exact solver supports at most {max} targets, got {actual}")]
    TooManyTargets {
        /// Number of targets supplied.
        actual: usize,
        /// Largest supported target count.
        max: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
