//! Adam first-order optimizer.
//!
//! Gradient descent with exponentially-decayed first and second moment
//! estimates and bias correction (Kingma & Ba 2015). This is the
//! workhorse for phase fitting: the QSP recurrence yields analytic
//! gradients, so each iteration costs a single grid sweep.

use super::{GradientOptimizer, OptimizationResult};

/// Adam optimizer configuration.
#[derive(Debug, Clone)]
pub struct Adam {
    /// Maximum number of iterations.
    pub maxiter: usize,
    /// Convergence tolerance on the objective value.
    pub tol: f64,
    /// Learning rate.
    pub learning_rate: f64,
    /// First-moment decay β₁.
    pub beta1: f64,
    /// Second-moment decay β₂.
    pub beta2: f64,
    /// Denominator fuzz ε.
    pub epsilon: f64,
}

impl Default for Adam {
    fn default() -> Self {
        Self {
            maxiter: 2000,
            tol: 1e-6,
            learning_rate: 0.05,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
        }
    }
}

impl Adam {
    /// Create an Adam optimizer with default settings.
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

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }
}

impl GradientOptimizer for Adam {
    fn minimize_with_grad<F>(
        &self,
        mut objective: F,
        initial_params: Vec<f64>,
    ) -> OptimizationResult
    where
        F: FnMut(&[f64]) -> (f64, Vec<f64>),
    {
        let n = initial_params.len();
        let mut x = initial_params;
        let mut m = vec![0.0; n];
        let mut v = vec![0.0; n];

        let (mut f_x, mut grad) = objective(&x);
        let mut num_evaluations = 1;
        let mut history = vec![f_x];

        let mut best_x = x.clone();
        let mut best_f = f_x;
        let mut converged = f_x < self.tol;
        let mut num_iterations = 0;

        if !converged {
            for k in 1..=self.maxiter {
                num_iterations = k;

                let bias1 = 1.0 - self.beta1.powi(k as i32);
                let bias2 = 1.0 - self.beta2.powi(k as i32);
                for i in 0..n {
                    m[i] = self.beta1 * m[i] + (1.0 - self.beta1) * grad[i];
                    v[i] = self.beta2 * v[i] + (1.0 - self.beta2) * grad[i] * grad[i];
                    let m_hat = m[i] / bias1;
                    let v_hat = v[i] / bias2;
                    x[i] -= self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon);
                }

                let (f, g) = objective(&x);
                num_evaluations += 1;
                f_x = f;
                grad = g;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adam_minimizes_quadratic() {
        let adam = Adam::new().with_maxiter(2000).with_learning_rate(0.1);

        // Minimize (x-1)² + (y+2)² with its exact gradient.
        let result = adam.minimize_with_grad(
            |p| {
                let (x, y) = (p[0], p[1]);
                let f = (x - 1.0).powi(2) + (y + 2.0).powi(2);
                (f, vec![2.0 * (x - 1.0), 2.0 * (y + 2.0)])
            },
            vec![0.0, 0.0],
        );

        assert!(result.converged);
        assert!(result.optimal_value < 1e-6);
        assert!((result.optimal_params[0] - 1.0).abs() < 1e-2);
        assert!((result.optimal_params[1] + 2.0).abs() < 1e-2);
    }

    #[test]
    fn adam_respects_iteration_cap() {
        let adam = Adam::new().with_maxiter(3).with_tol(0.0);
        let result = adam.minimize_with_grad(
            |p| (p[0] * p[0], vec![2.0 * p[0]]),
            vec![10.0],
        );
        assert_eq!(result.num_iterations, 3);
        assert!(!result.converged);
        // Best-effort value is still reported.
        assert!(result.optimal_value <= 100.0);
    }

    #[test]
    fn adam_keeps_best_not_last() {
        // An oscillating objective: the best value seen must be retained
        // even if a later iterate regresses.
        let adam = Adam::new().with_maxiter(50).with_tol(0.0).with_learning_rate(2.0);
        let result =
            adam.minimize_with_grad(|p| (p[0] * p[0], vec![2.0 * p[0]]), vec![1.0]);
        let min_hist = result.history.iter().copied().fold(f64::INFINITY, f64::min);
        assert!((result.optimal_value - min_hist).abs() < 1e-15);
    }

    #[test]
    fn already_converged_input_short_circuits() {
        let adam = Adam::new().with_tol(1e-3);
        let result = adam.minimize_with_grad(|p| (p[0] * p[0], vec![2.0 * p[0]]), vec![0.0]);
        assert!(result.converged);
        assert_eq!(result.num_iterations, 0);
        assert_eq!(result.num_evaluations, 1);
    }
}
