//! Deviation losses over the sample grid.
//!
//! Four losses: mean or max absolute deviation, plain or squared. Each
//! also supplies the weights that
//! turn per-sample response gradients into a loss gradient:
//!
//!   ∂L/∂φ_k = Σ_j Re[ conj(w_j) · ∂r_j/∂φ_k ]

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Residuals below this magnitude contribute no absolute-value
/// subgradient.
const ABS_FLOOR: f64 = 1e-15;

/// Deviation loss over residuals `e_j = r_j - f_j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Loss {
    /// `(1/N) Σ |e_j|`
    MeanAbs,
    /// `max_j |e_j|`
    MaxAbs,
    /// `(1/N) Σ |e_j|²`
    #[default]
    MeanSquared,
    /// `max_j |e_j|²`
    MaxSquared,
}

impl Loss {
    /// Evaluate the loss over a residual vector.
    pub fn evaluate(&self, residuals: &[Complex64]) -> f64 {
        let n = residuals.len() as f64;
        match self {
            Loss::MeanAbs => residuals.iter().map(|e| e.norm()).sum::<f64>() / n,
            Loss::MaxAbs => residuals.iter().map(|e| e.norm()).fold(0.0, f64::max),
            Loss::MeanSquared => residuals.iter().map(|e| e.norm_sqr()).sum::<f64>() / n,
            Loss::MaxSquared => residuals.iter().map(|e| e.norm_sqr()).fold(0.0, f64::max),
        }
    }

    /// Per-sample gradient weights `w_j` (see module docs).
    ///
    /// The max losses yield a subgradient supported on the worst sample.
    pub fn weights(&self, residuals: &[Complex64]) -> Vec<Complex64> {
        let n = residuals.len() as f64;
        match self {
            Loss::MeanAbs => residuals
                .iter()
                .map(|&e| {
                    let mag = e.norm();
                    if mag < ABS_FLOOR {
                        Complex64::new(0.0, 0.0)
                    } else {
                        e / (mag * n)
                    }
                })
                .collect(),
            Loss::MeanSquared => residuals.iter().map(|&e| e * (2.0 / n)).collect(),
            Loss::MaxAbs | Loss::MaxSquared => {
                let mut weights = vec![Complex64::new(0.0, 0.0); residuals.len()];
                if let Some((j, &e)) = residuals
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
                {
                    let mag = e.norm();
                    if mag >= ABS_FLOOR {
                        weights[j] = match self {
                            Loss::MaxAbs => e / mag,
                            _ => e * 2.0,
                        };
                    }
                }
                weights
            }
        }
    }
}

impl std::fmt::Display for Loss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Loss::MeanAbs => "mean |e|",
            Loss::MaxAbs => "max |e|",
            Loss::MeanSquared => "mean |e|²",
            Loss::MaxSquared => "max |e|²",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residuals() -> Vec<Complex64> {
        vec![
            Complex64::new(0.3, 0.4), // |e| = 0.5
            Complex64::new(0.0, 0.0),
            Complex64::new(-1.0, 0.0),
        ]
    }

    #[test]
    fn mean_and_max_values() {
        let e = residuals();
        assert!((Loss::MeanAbs.evaluate(&e) - 0.5).abs() < 1e-12);
        assert!((Loss::MaxAbs.evaluate(&e) - 1.0).abs() < 1e-12);
        assert!((Loss::MeanSquared.evaluate(&e) - (0.25 + 1.0) / 3.0).abs() < 1e-12);
        assert!((Loss::MaxSquared.evaluate(&e) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mean_squared_weights_are_scaled_residuals() {
        let e = residuals();
        let w = Loss::MeanSquared.weights(&e);
        for (&wj, &ej) in w.iter().zip(&e) {
            assert!((wj - ej * (2.0 / 3.0)).norm() < 1e-12);
        }
    }

    #[test]
    fn max_weights_supported_on_worst_sample() {
        let e = residuals();
        let w = Loss::MaxAbs.weights(&e);
        assert_eq!(w[0], Complex64::new(0.0, 0.0));
        assert_eq!(w[1], Complex64::new(0.0, 0.0));
        assert!((w[2] - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn zero_residuals_give_zero_weights() {
        let e = vec![Complex64::new(0.0, 0.0); 4];
        for loss in [Loss::MeanAbs, Loss::MaxAbs, Loss::MeanSquared, Loss::MaxSquared] {
            assert_eq!(loss.evaluate(&e), 0.0);
            assert!(loss.weights(&e).iter().all(|w| w.norm() == 0.0));
        }
    }
}
