//! SPSA (Simultaneous Perturbation Stochastic Approximation) optimizer.
//!
//! A gradient-free stochastic method: each iteration estimates the
//! gradient from two objective evaluations at a random ± perturbation.
//! Useful when the response gradient is not wanted, at the cost of far
//! noisier convergence than Adam.

use rand::Rng;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::{OptimizationResult, Optimizer};

/// SPSA optimizer configuration.
#[derive(Debug, Clone)]
pub struct Spsa {
    /// Maximum number of iterations.
    pub maxiter: usize,
    /// Convergence tolerance on the objective value.
    pub tol: f64,
    /// Initial step size.
    pub a: f64,
    /// Perturbation size.
    pub c: f64,
    /// Step-size decay exponent.
    pub alpha: f64,
    /// Perturbation decay exponent.
    pub gamma: f64,
    /// RNG seed for the perturbation directions.
    pub seed: u64,
}

impl Default for Spsa {
    fn default() -> Self {
        Self {
            maxiter: 2000,
            tol: 1e-6,
            a: 0.1,
            c: 0.1,
            alpha: 0.602,
            gamma: 0.101,
            seed: 42,
        }
    }
}

impl Spsa {
    /// Create an SPSA optimizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum iterations.
    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the RNG seed (runs with the same seed are reproducible).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Optimizer for Spsa {
    fn minimize<F>(&self, mut objective: F, initial_params: Vec<f64>) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> f64,
    {
        let n = initial_params.len();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut x = initial_params;

        let mut f_x = objective(&x);
        let mut num_evaluations = 1;
        let mut history = vec![f_x];

        let mut best_x = x.clone();
        let mut best_f = f_x;
        let mut converged = f_x < self.tol;
        let mut num_iterations = 0;

        if !converged {
            for k in 0..self.maxiter {
                num_iterations = k + 1;
                let a_k = self.a / ((k + 1) as f64).powf(self.alpha);
                let c_k = self.c / ((k + 1) as f64).powf(self.gamma);

                // Rademacher ±1 perturbation direction.
                let delta: Vec<f64> = (0..n)
                    .map(|_| if rng.r#gen::<bool>() { 1.0 } else { -1.0 })
                    .collect();

                let x_plus: Vec<f64> =
                    x.iter().zip(&delta).map(|(xi, di)| xi + c_k * di).collect();
                let x_minus: Vec<f64> =
                    x.iter().zip(&delta).map(|(xi, di)| xi - c_k * di).collect();

                let f_plus = objective(&x_plus);
                let f_minus = objective(&x_minus);
                num_evaluations += 2;

                let scale = (f_plus - f_minus) / (2.0 * c_k);
                for i in 0..n {
                    x[i] -= a_k * scale / delta[i];
                }

                f_x = objective(&x);
                num_evaluations += 1;
                history.push(f_x);

                if f_x < best_f {
                    best_f = f_x;
                    best_x.copy_from_slice(&x);
                }
                if f_x < self.tol {
                    converged = true;
                    break;
                }
            }
        }

        OptimizationResult {
            optimal_params: best_x,
            optimal_value: best_f,
            num_evaluations,
            num_iterations,
            history,
            converged,
        }
    }
}
