//! Error types for the phase-fitting crate.
//!
//! Numerical non-convergence is deliberately not represented here: a
//! fit that runs out of iterations still yields a best-effort
//! [`crate::PhaseFit`] with `converged = false`.

use thiserror::Error;

/// Errors produced by phase-angle fitting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolveError {
    /// A sampled target value exceeds the unitarity bound |f| ≤ 1.
    #[error("target magnitude {magnitude} at sample {index} exceeds the unitarity bound |f| ≤ 1")]
    TargetOutOfRange {
        /// Grid index of the offending sample.
        index: usize,
        /// Magnitude of the sampled value.
        magnitude: f64,
    },

    /// A sampled target value is not finite.
    #[error("target value at sample {index} is not finite")]
    NonFiniteTarget {
        /// Grid index of the offending sample.
        index: usize,
    },

    /// Core recurrence error (empty phases / grid, non-finite angle).
    #[error("QSP recurrence error: {0}")]
    Core(#[from] qsp_core::CoreError),
}

/// Result type for phase-fitting operations.
pub type SolveResult<T> = Result<T, SolveError>;
