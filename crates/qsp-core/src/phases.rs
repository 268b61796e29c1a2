//! Phase sequences.
//!
//! The sole artifact of a phase-finding run: an ordered list of real
//! angles `[φ₀, φ₁, …, φ_d]`. A degree-`d` sequence has `d + 1` angles.
//! Order matters (the angles are applied as a recurrence) and the
//! sequence is immutable once constructed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{CoreError, CoreResult};

/// An ordered, immutable sequence of QSP phase angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseSequence {
    angles: Vec<f64>,
}

impl PhaseSequence {
    /// Create a sequence from a list of angles.
    ///
    /// Rejects empty lists and non-finite angles.
    pub fn new(angles: Vec<f64>) -> CoreResult<Self> {
        if angles.is_empty() {
            return Err(CoreError::EmptyPhases);
        }
        for (index, &value) in angles.iter().enumerate() {
            if !value.is_finite() {
                return Err(CoreError::NonFinitePhase { index, value });
            }
        }
        Ok(Self { angles })
    }

    /// Draw `degree + 1` angles uniformly from `[0, π)` with a seeded RNG.
    ///
    /// The same seed always produces the same sequence, which makes
    /// phase-fitting runs reproducible.
    pub fn random(degree: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let angles = (0..=degree).map(|_| rng.gen_range(0.0..PI)).collect();
        Self { angles }
    }

    /// All angles, in application order.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// The polynomial degree this sequence parameterizes: `len - 1`.
    pub fn degree(&self) -> usize {
        self.angles.len() - 1
    }

    /// Number of angles (`degree + 1`).
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

impl std::fmt::Display for PhaseSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, phi) in self.angles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{phi:.6}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_rejected() {
        assert!(matches!(
            PhaseSequence::new(vec![]),
            Err(CoreError::EmptyPhases)
        ));
    }

    #[test]
    fn non_finite_angle_rejected() {
        assert!(matches!(
            PhaseSequence::new(vec![0.1, f64::NAN]),
            Err(CoreError::NonFinitePhase { index: 1, .. })
        ));
    }

    #[test]
    fn degree_is_len_minus_one() {
        let p = PhaseSequence::new(vec![0.1, 0.2, 0.3]).unwrap();
        assert_eq!(p.degree(), 2);
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = PhaseSequence::random(7, 42);
        let b = PhaseSequence::random(7, 42);
        assert_eq!(a, b);
        let c = PhaseSequence::random(7, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn random_angles_in_range() {
        let p = PhaseSequence::random(31, 7);
        assert_eq!(p.len(), 32);
        for &phi in p.angles() {
            assert!((0.0..PI).contains(&phi));
        }
    }
}
