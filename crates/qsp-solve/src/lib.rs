//! `qsp-solve` — numerical phase-angle fitting for QSP sequences.
//!
//! Given a target function sampled on a θ grid and a desired polynomial
//! degree, find a phase sequence whose QSP response reproduces the
//! target:
//!
//! 1. **Targets** — cosine/sine Hamiltonian evolution, the coherent
//!    one-shot complex exponential, and the smoothed sign function used
//!    for amplitude amplification.
//! 2. **Solver** — an iterative optimizer (gradient-based Adam by
//!    default, derivative-free SPSA as a fallback) minimizing a
//!    deviation loss over the grid.
//! 3. **Reports** — error statistics of a fitted sequence on a
//!    (possibly finer) grid.
//!
//! Non-convergence within the iteration cap is not an error: the solver
//! returns the best sequence found, flags it, and logs a warning with
//! the achieved residual.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use qsp_core::ThetaGrid;
//! use qsp_solve::{CosineEvolution, FitReport, PhaseSolver};
//!
//! let grid = ThetaGrid::uniform(64).unwrap();
//! let target = CosineEvolution::new(1.0);
//!
//! let fit = PhaseSolver::new(6).solve(&target, &grid).unwrap();
//! let report = FitReport::evaluate(&fit.phases, &target, &grid, fit.convention);
//! println!("max error {:.2e} after {} iterations", report.max_error, fit.iterations);
//! ```

pub mod error;
pub mod loss;
pub mod optimizers;
pub mod report;
pub mod solver;
pub mod targets;

pub use error::{SolveError, SolveResult};
pub use loss::Loss;
pub use optimizers::{Adam, GradientOptimizer, OptimizationResult, Optimizer, Spsa};
pub use report::FitReport;
pub use solver::{Method, PhaseFit, PhaseSolver};
pub use targets::{
    CoherentOneShot, CosineEvolution, SineEvolution, SmoothedSign, TargetFunction,
};
