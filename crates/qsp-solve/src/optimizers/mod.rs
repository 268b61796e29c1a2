//! Iterative optimizers for phase-angle fitting.
//!
//! Two flavors: [`Adam`] consumes analytic gradients (the recurrence
//! supplies them cheaply), [`Spsa`] needs only objective values. Both
//! report the same [`OptimizationResult`].

mod adam;
mod spsa;

pub use adam::Adam;
pub use spsa::Spsa;

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best parameter values found.
    pub optimal_params: Vec<f64>,
    /// Best objective value found.
    pub optimal_value: f64,
    /// Number of objective evaluations.
    pub num_evaluations: usize,
    /// Number of iterations.
    pub num_iterations: usize,
    /// History of objective values, one entry per iteration.
    pub history: Vec<f64>,
    /// Whether the objective dropped below the tolerance.
    pub converged: bool,
}

/// A derivative-free optimizer.
pub trait Optimizer {
    /// Minimize `objective` starting from `initial_params`.
    fn minimize<F>(&self, objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64;
}

/// A gradient-driven optimizer.
pub trait GradientOptimizer {
    /// Minimize an objective that returns `(value, gradient)`.
    fn minimize_with_grad<F>(&self, objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> (f64, Vec<f64>);
}
