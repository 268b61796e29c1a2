//! Property-based tests for the deviation losses.
//!
//! The four losses agree on ordering (mean ≤ max, abs² = squared on a
//! single worst sample) and their gradient weights line up with the
//! residual vector for any residual profile.

use num_complex::Complex64;
use proptest::prelude::*;
use qsp_solve::Loss;

/// Generate a non-empty residual vector with bounded components.
fn arb_residuals() -> impl Strategy<Value = Vec<Complex64>> {
    prop::collection::vec((-2.0..2.0f64, -2.0..2.0f64), 1..32)
        .prop_map(|pairs| pairs.into_iter().map(|(re, im)| Complex64::new(re, im)).collect())
}

proptest! {
    #[test]
    fn mean_never_exceeds_max(residuals in arb_residuals()) {
        let mean_abs = Loss::MeanAbs.evaluate(&residuals);
        let max_abs = Loss::MaxAbs.evaluate(&residuals);
        prop_assert!(mean_abs <= max_abs + 1e-12);

        let mean_sq = Loss::MeanSquared.evaluate(&residuals);
        let max_sq = Loss::MaxSquared.evaluate(&residuals);
        prop_assert!(mean_sq <= max_sq + 1e-12);
    }

    #[test]
    fn squared_max_is_square_of_abs_max(residuals in arb_residuals()) {
        let max_abs = Loss::MaxAbs.evaluate(&residuals);
        let max_sq = Loss::MaxSquared.evaluate(&residuals);
        prop_assert!((max_sq - max_abs * max_abs).abs() < 1e-12);
    }

    #[test]
    fn losses_are_nonnegative_and_finite(residuals in arb_residuals()) {
        for loss in [Loss::MeanAbs, Loss::MaxAbs, Loss::MeanSquared, Loss::MaxSquared] {
            let value = loss.evaluate(&residuals);
            prop_assert!(value >= 0.0);
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn weights_match_residual_count_and_direction(residuals in arb_residuals()) {
        for loss in [Loss::MeanAbs, Loss::MaxAbs, Loss::MeanSquared, Loss::MaxSquared] {
            let weights = loss.weights(&residuals);
            prop_assert_eq!(weights.len(), residuals.len());
            // Each nonzero weight points along its residual: the cross
            // product of the pair vanishes.
            for (w, e) in weights.iter().zip(&residuals) {
                let cross = w.re * e.im - w.im * e.re;
                prop_assert!(cross.abs() < 1e-9, "weight {w} not aligned with residual {e}");
            }
        }
    }
}
