//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by recurrence construction and evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A phase sequence needs at least one angle (degree ≥ 0).
    #[error("phase sequence is empty — a QSP sequence has degree + 1 ≥ 1 angles")]
    EmptyPhases,

    /// A sample grid needs at least one point.
    #[error("sample grid is empty — n_samples must be at least 1, got {0}")]
    EmptyGrid(usize),

    /// A phase angle is not a finite number.
    #[error("phase angle at index {index} is not finite: {value}")]
    NonFinitePhase {
        /// Position in the sequence.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
