//! Error types for the simulation core

use thiserror::Error;

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Precondition violations detected before a step mutates anything
///
/// Numerical degeneracies (zero-length directions, singular covariance
/// matrices) are not errors and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("cannot build a body from an empty rest shape")]
    EmptyShape,

    #[error("body {body} has no vertices")]
    EmptyBody { body: usize },

    #[error("body {body}: `{field}` has {found} entries, `position` has {expected}")]
    MismatchedLengths {
        body: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{kind}: attraction radius must be positive and finite, got {value}")]
    InvalidAttractionRadius { kind: &'static str, value: f64 },

    #[error("{kind}: radius must be non-negative and finite, got {value}")]
    InvalidRadius { kind: &'static str, value: f64 },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("body {body} points at black hole {id}, but the scene has {count}")]
    UnknownBlackHole { body: usize, id: usize, count: usize },
}
