//! Fit evaluation reports.
//!
//! Applies a fitted sequence through the recurrence on a (possibly
//! finer) grid, compares to the target, and summarizes the deviation.
//! Reports serialize to JSON for export; nothing is persisted by this
//! crate itself.

use serde::{Deserialize, Serialize};

use qsp_core::{Convention, PhaseSequence, ThetaGrid, response_on_grid};

use crate::targets::TargetFunction;

/// Error statistics of a phase sequence against a target on a grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    /// Target name.
    pub target: String,
    /// Sequence degree.
    pub degree: usize,
    /// Number of evaluation samples.
    pub n_samples: usize,
    /// Largest absolute deviation over the grid.
    pub max_error: f64,
    /// Mean absolute deviation over the grid.
    pub mean_error: f64,
    /// Root-mean-square deviation over the grid.
    pub rms_error: f64,
}

impl FitReport {
    /// Evaluate `phases` against `target` on `grid`.
    pub fn evaluate<T: TargetFunction + ?Sized>(
        phases: &PhaseSequence,
        target: &T,
        grid: &ThetaGrid,
        convention: Convention,
    ) -> Self {
        let responses = response_on_grid(phases, grid, convention);
        let samples = target.sample(grid);

        let deviations: Vec<f64> = responses
            .iter()
            .zip(&samples)
            .map(|(r, f)| (r - f).norm())
            .collect();

        let n = deviations.len() as f64;
        let max_error = deviations.iter().copied().fold(0.0, f64::max);
        let mean_error = deviations.iter().sum::<f64>() / n;
        let rms_error = (deviations.iter().map(|d| d * d).sum::<f64>() / n).sqrt();

        Self {
            target: target.name().to_string(),
            degree: phases.degree(),
            n_samples: deviations.len(),
            max_error,
            mean_error,
            rms_error,
        }
    }
}

impl std::fmt::Display for FitReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (degree {}, {} samples): max {:.3e}, mean {:.3e}, rms {:.3e}",
            self.target, self.degree, self.n_samples, self.max_error, self.mean_error, self.rms_error
        )
    }
}
