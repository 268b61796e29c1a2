//! Sample grids for the signal parameter.
//!
//! Targets and responses are compared on a uniform grid of θ over
//! `[0, π)`; the polynomial variable is `x = cos θ`, which sweeps
//! `(-1, 1]` as θ sweeps the grid.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{CoreError, CoreResult};

/// A uniform grid of signal angles θ ∈ [0, π).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThetaGrid {
    thetas: Vec<f64>,
}

impl ThetaGrid {
    /// Create a uniform grid with `n_samples` points: θ_j = j·π/n.
    pub fn uniform(n_samples: usize) -> CoreResult<Self> {
        if n_samples == 0 {
            return Err(CoreError::EmptyGrid(0));
        }
        let step = PI / n_samples as f64;
        let thetas = (0..n_samples).map(|j| j as f64 * step).collect();
        Ok(Self { thetas })
    }

    /// The θ samples.
    pub fn thetas(&self) -> &[f64] {
        &self.thetas
    }

    /// The polynomial-variable samples `x_j = cos θ_j`.
    pub fn xs(&self) -> Vec<f64> {
        self.thetas.iter().map(|t| t.cos()).collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.thetas.len()
    }

    /// Always false: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.thetas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_rejected() {
        assert!(matches!(ThetaGrid::uniform(0), Err(CoreError::EmptyGrid(0))));
    }

    #[test]
    fn grid_spans_zero_to_pi_exclusive() {
        let grid = ThetaGrid::uniform(300).unwrap();
        assert_eq!(grid.len(), 300);
        assert_eq!(grid.thetas()[0], 0.0);
        assert!(*grid.thetas().last().unwrap() < PI);
    }

    #[test]
    fn xs_are_cosines() {
        let grid = ThetaGrid::uniform(4).unwrap();
        let xs = grid.xs();
        assert!((xs[0] - 1.0).abs() < 1e-12);
        assert!((xs[2] - 0.0).abs() < 1e-12); // cos(π/2)
    }
}
