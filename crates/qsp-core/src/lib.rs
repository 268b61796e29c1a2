//! `qsp-core` — the Quantum Signal Processing recurrence.
//!
//! A QSP sequence interleaves a fixed signal operator `W(x) = e^{iθX}`
//! (with `x = cos θ`) with processing rotations `Rz(φ_k) = e^{iφ_k Z}`:
//!
//!   U(x; φ) = Rz(φ₀) · ∏_{k=1..d} [ W(x) · Rz(φ_k) ]
//!
//! The upper-left element of `U` is a degree-`d` polynomial `P(x)`; the
//! phase angles `φ` select which polynomial. This crate provides the
//! matrix factors, phase-sequence type, sample grids, and response
//! evaluation (with analytic phase gradients for the fitting crate).
//!
//! # Quick start
//!
//! ```rust
//! use qsp_core::{Convention, PhaseSequence, ThetaGrid, response_on_grid};
//!
//! // Degree-0 sequence: response is the pure phase e^{iφ₀}.
//! let phases = PhaseSequence::new(vec![0.5]).unwrap();
//! let grid = ThetaGrid::uniform(16).unwrap();
//! let response = response_on_grid(&phases, &grid, Convention::ZeroZero);
//! assert!((response[0].norm() - 1.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod grid;
pub mod phases;
pub mod response;
pub mod unitary;

pub use error::{CoreError, CoreResult};
pub use grid::ThetaGrid;
pub use phases::PhaseSequence;
pub use response::{Convention, qsp_response, response_gradient, response_on_grid};
pub use unitary::Unitary2;
