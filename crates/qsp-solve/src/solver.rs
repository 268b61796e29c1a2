//! The phase-angle solver driver.
//!
//! Wires a target, a loss, and an optimizer into the three-stage
//! pipeline: sample the target on the grid, iterate the optimizer on
//! the residual, and package the fitted sequence with its convergence
//! diagnostics.

use num_complex::Complex64;
use tracing::{debug, warn};

use qsp_core::{Convention, PhaseSequence, ThetaGrid, response_gradient, response_on_grid};

use crate::error::{SolveError, SolveResult};
use crate::loss::Loss;
use crate::optimizers::{Adam, GradientOptimizer, OptimizationResult, Optimizer, Spsa};
use crate::targets::TargetFunction;

/// Slack on the |f| ≤ 1 bound so targets scaled to exactly 1.0 survive
/// rounding.
const UNITARITY_SLACK: f64 = 1e-9;

/// Optimization method used by the solver.
#[derive(Debug, Clone)]
pub enum Method {
    /// Gradient descent with analytic response gradients.
    Adam(Adam),
    /// Derivative-free stochastic approximation.
    Spsa(Spsa),
}

impl Method {
    fn name(&self) -> &'static str {
        match self {
            Method::Adam(_) => "adam",
            Method::Spsa(_) => "spsa",
        }
    }
}

/// A fitted phase sequence with its convergence diagnostics.
///
/// `converged = false` is a best-effort outcome, not a failure: the
/// phases are the best found and `residual` says how good they are.
#[derive(Debug, Clone)]
pub struct PhaseFit {
    /// The fitted sequence.
    pub phases: PhaseSequence,
    /// Convention the sequence was fitted under.
    pub convention: Convention,
    /// Final loss value on the fitting grid.
    pub residual: f64,
    /// Optimizer iterations used.
    pub iterations: usize,
    /// Objective evaluations used.
    pub evaluations: usize,
    /// Loss history, one entry per iteration.
    pub history: Vec<f64>,
    /// Whether the residual dropped below the tolerance.
    pub converged: bool,
}

/// Phase-angle solver.
///
/// Builder-style configuration; `solve` runs the full pipeline once and
/// has no side effects beyond log output.
#[derive(Debug, Clone)]
pub struct PhaseSolver {
    degree: usize,
    convention: Convention,
    loss: Loss,
    method: Method,
    /// Seed for the deterministic phase initialization.
    seed: u64,
}

impl PhaseSolver {
    /// Create a solver for a degree-`degree` sequence (`degree + 1`
    /// phases) with the default configuration: `|0><0|` convention,
    /// mean-squared loss, Adam.
    ///
    /// The response has the parity of `degree`, so even targets want an
    /// even degree and odd targets an odd one; a mismatched parity
    /// leaves a large residual no matter how long the optimizer runs.
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            convention: Convention::ZeroZero,
            loss: Loss::default(),
            method: Method::Adam(Adam::default()),
            seed: 42,
        }
    }

    /// Set the measurement convention.
    #[must_use]
    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    /// Set the deviation loss.
    #[must_use]
    pub fn with_loss(mut self, loss: Loss) -> Self {
        self.loss = loss;
        self
    }

    /// Set the optimization method.
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the initialization seed. Identical inputs and seed yield an
    /// identical fit.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit a phase sequence to `target` sampled on `grid`.
    ///
    /// Validates the target against the unitarity bound, initializes
    /// `degree + 1` phases from the seed, and iterates the configured
    /// optimizer. Never returns an error for non-convergence — see
    /// [`PhaseFit::converged`].
    pub fn solve<T: TargetFunction + ?Sized>(
        &self,
        target: &T,
        grid: &ThetaGrid,
    ) -> SolveResult<PhaseFit> {
        let samples = target.sample(grid);
        validate_samples(&samples)?;

        debug!(
            target = target.name(),
            degree = self.degree,
            n_samples = grid.len(),
            method = self.method.name(),
            loss = %self.loss,
            seed = self.seed,
            "fitting QSP phase sequence"
        );

        let initial = PhaseSequence::random(self.degree, self.seed);
        let result = match &self.method {
            Method::Adam(adam) => adam.minimize_with_grad(
                grad_objective(grid, &samples, self.convention, self.loss),
                initial.angles().to_vec(),
            ),
            Method::Spsa(spsa) => spsa.minimize(
                value_objective(grid, &samples, self.convention, self.loss),
                initial.angles().to_vec(),
            ),
        };

        self.package(result)
    }

    fn package(&self, result: OptimizationResult) -> SolveResult<PhaseFit> {
        if !result.converged {
            warn!(
                residual = result.optimal_value,
                iterations = result.num_iterations,
                degree = self.degree,
                "phase fit did not converge within the iteration cap; returning best effort"
            );
        }

        let phases = PhaseSequence::new(result.optimal_params)?;
        Ok(PhaseFit {
            phases,
            convention: self.convention,
            residual: result.optimal_value,
            iterations: result.num_iterations,
            evaluations: result.num_evaluations,
            history: result.history,
            converged: result.converged,
        })
    }
}

fn validate_samples(samples: &[Complex64]) -> SolveResult<()> {
    for (index, s) in samples.iter().enumerate() {
        if !s.re.is_finite() || !s.im.is_finite() {
            return Err(SolveError::NonFiniteTarget { index });
        }
        let magnitude = s.norm();
        if magnitude > 1.0 + UNITARITY_SLACK {
            return Err(SolveError::TargetOutOfRange { index, magnitude });
        }
    }
    Ok(())
}

/// Loss-and-gradient closure for the gradient path.
fn grad_objective<'a>(
    grid: &'a ThetaGrid,
    samples: &'a [Complex64],
    convention: Convention,
    loss: Loss,
) -> impl FnMut(&[f64]) -> (f64, Vec<f64>) + 'a {
    move |params: &[f64]| {
        let Ok(phases) = PhaseSequence::new(params.to_vec()) else {
            // Diverged iterate (non-finite angle): poison the step.
            return (f64::INFINITY, vec![0.0; params.len()]);
        };

        let n = grid.len();
        let mut residuals = Vec::with_capacity(n);
        let mut per_sample_grads = Vec::with_capacity(n);
        for (&theta, &f_j) in grid.thetas().iter().zip(samples) {
            let (r, g) = response_gradient(&phases, theta, convention);
            residuals.push(r - f_j);
            per_sample_grads.push(g);
        }

        let value = loss.evaluate(&residuals);
        let weights = loss.weights(&residuals);
        let mut grad = vec![0.0; params.len()];
        for (w, g) in weights.iter().zip(&per_sample_grads) {
            if w.norm_sqr() == 0.0 {
                continue;
            }
            for (gi, dr) in grad.iter_mut().zip(g) {
                *gi += (w.conj() * dr).re;
            }
        }
        (value, grad)
    }
}

/// Loss-only closure for the derivative-free path.
fn value_objective<'a>(
    grid: &'a ThetaGrid,
    samples: &'a [Complex64],
    convention: Convention,
    loss: Loss,
) -> impl FnMut(&[f64]) -> f64 + 'a {
    move |params: &[f64]| {
        let Ok(phases) = PhaseSequence::new(params.to_vec()) else {
            return f64::INFINITY;
        };
        let responses = response_on_grid(&phases, grid, convention);
        let residuals: Vec<Complex64> = responses
            .iter()
            .zip(samples)
            .map(|(r, f_j)| r - f_j)
            .collect();
        loss.evaluate(&residuals)
    }
}
