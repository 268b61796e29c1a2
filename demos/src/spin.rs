//! A single spin in a transverse field, evolved via QSP phases.
//!
//! `H = (ω/2)·Z + g·X`. The Hamiltonian is normalized by
//! `λ = |ω/2| + |g|` so its spectrum fits in `[-1, 1]`, and fitted
//! cosine/sine sequences for the rescaled time `τ = λt` are applied
//! spectrally: each eigenvalue `x_j = E_j/λ` picks up the factor
//! `P_cos(x_j) - i·P_sin(x_j) ≈ e^{-i E_j t}`.

use num_complex::Complex64;
use qsp_core::{Convention, PhaseSequence, qsp_response};

/// A two-level spin Hamiltonian `(ω/2)·Z + g·X`.
#[derive(Debug, Clone, Copy)]
pub struct SpinHamiltonian {
    /// Level splitting ω.
    pub omega: f64,
    /// Transverse coupling g.
    pub coupling: f64,
}

/// One eigenpair of the spin Hamiltonian.
#[derive(Debug, Clone, Copy)]
pub struct EigenPair {
    /// Eigenvalue E.
    pub energy: f64,
    /// Normalized eigenvector `[⟨0|v⟩, ⟨1|v⟩]`.
    pub vector: [Complex64; 2],
}

impl SpinHamiltonian {
    /// Create a spin Hamiltonian.
    pub fn new(omega: f64, coupling: f64) -> Self {
        Self { omega, coupling }
    }

    /// Normalization constant `λ = |ω/2| + |g|` (sum of Pauli
    /// coefficient magnitudes).
    pub fn lambda(&self) -> f64 {
        (self.omega / 2.0).abs() + self.coupling.abs()
    }

    /// Energy gap half-width `E = √((ω/2)² + g²)`; eigenvalues are ±E.
    pub fn energy(&self) -> f64 {
        ((self.omega / 2.0).powi(2) + self.coupling.powi(2)).sqrt()
    }

    /// Both eigenpairs, +E first.
    pub fn eigensystem(&self) -> [EigenPair; 2] {
        let e = self.energy();
        let half_omega = self.omega / 2.0;
        let g = self.coupling;

        if g.abs() < 1e-14 {
            // Diagonal Hamiltonian: computational basis states.
            let (up, down) = (
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            );
            return if half_omega >= 0.0 {
                [
                    EigenPair { energy: e, vector: up },
                    EigenPair { energy: -e, vector: down },
                ]
            } else {
                [
                    EigenPair { energy: e, vector: down },
                    EigenPair { energy: -e, vector: up },
                ]
            };
        }

        let normalize = |a: f64, b: f64| {
            let norm = (a * a + b * b).sqrt();
            [Complex64::new(a / norm, 0.0), Complex64::new(b / norm, 0.0)]
        };
        [
            EigenPair {
                energy: e,
                vector: normalize(g, e - half_omega),
            },
            EigenPair {
                energy: -e,
                vector: normalize(g, -e - half_omega),
            },
        ]
    }

    /// Exact `⟨Z⟩(t)` starting from `|0⟩` (Rabi formula):
    /// `1 - 2·(g²/E²)·sin²(Et)`.
    pub fn exact_z_expectation(&self, time: f64) -> f64 {
        let e = self.energy();
        if e == 0.0 {
            return 1.0;
        }
        let flip = (self.coupling / e).powi(2) * (e * time).sin().powi(2);
        1.0 - 2.0 * flip
    }

    /// Apply `f(H/λ)` spectrally to `|0⟩`, where
    /// `f(x) = Re r_cos(x) - i·Re r_sin(x)` from the two fitted
    /// sequences, evaluated under the convention they were fitted with.
    pub fn qsp_evolved_state(
        &self,
        cos_phases: &PhaseSequence,
        sin_phases: &PhaseSequence,
        convention: Convention,
    ) -> [Complex64; 2] {
        let lambda = self.lambda();
        let mut state = [Complex64::new(0.0, 0.0); 2];

        for pair in self.eigensystem() {
            let x = if lambda == 0.0 { 0.0 } else { pair.energy / lambda };
            // qsp_response takes θ with x = cos θ.
            let theta = x.clamp(-1.0, 1.0).acos();
            let c = qsp_response(cos_phases, theta, convention).re;
            let s = qsp_response(sin_phases, theta, convention).re;
            let factor = Complex64::new(c, -s);

            // ⟨v|0⟩ · f(x) · |v⟩
            let overlap = pair.vector[0].conj();
            state[0] += factor * overlap * pair.vector[0];
            state[1] += factor * overlap * pair.vector[1];
        }
        state
    }

    /// `⟨Z⟩` of a (possibly unnormalized) state, renormalized.
    pub fn z_expectation(state: &[Complex64; 2]) -> f64 {
        let norm_sqr = state[0].norm_sqr() + state[1].norm_sqr();
        if norm_sqr == 0.0 {
            return 0.0;
        }
        (state[0].norm_sqr() - state[1].norm_sqr()) / norm_sqr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eigenvalues_are_plus_minus_energy() {
        let h = SpinHamiltonian::new(1.0, 0.5);
        let [plus, minus] = h.eigensystem();
        assert!((plus.energy - h.energy()).abs() < 1e-12);
        assert!((minus.energy + h.energy()).abs() < 1e-12);
    }

    #[test]
    fn eigenvectors_are_orthonormal() {
        let h = SpinHamiltonian::new(0.7, -1.3);
        let [plus, minus] = h.eigensystem();
        let ip = plus.vector[0].conj() * minus.vector[0] + plus.vector[1].conj() * minus.vector[1];
        assert!(ip.norm() < 1e-12);
        for pair in [plus, minus] {
            let n = pair.vector[0].norm_sqr() + pair.vector[1].norm_sqr();
            assert!((n - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn eigenvectors_satisfy_eigen_equation() {
        let h = SpinHamiltonian::new(1.1, 0.4);
        let half_omega = h.omega / 2.0;
        for pair in h.eigensystem() {
            // H v = E v, row by row.
            let hv0 = half_omega * pair.vector[0] + h.coupling * pair.vector[1];
            let hv1 = h.coupling * pair.vector[0] - half_omega * pair.vector[1];
            assert!((hv0 - pair.energy * pair.vector[0]).norm() < 1e-12);
            assert!((hv1 - pair.energy * pair.vector[1]).norm() < 1e-12);
        }
    }

    #[test]
    fn diagonal_hamiltonian_keeps_basis_states() {
        let h = SpinHamiltonian::new(2.0, 0.0);
        assert!((h.exact_z_expectation(1.7) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rabi_formula_matches_spectral_evolution() {
        // Apply the exact e^{-iEt} factors spectrally and compare ⟨Z⟩
        // against the closed-form Rabi expression.
        let h = SpinHamiltonian::new(1.0, 0.8);
        let t = 1.3;
        let mut state = [Complex64::new(0.0, 0.0); 2];
        for pair in h.eigensystem() {
            let factor = Complex64::from_polar(1.0, -pair.energy * t);
            let overlap = pair.vector[0].conj();
            state[0] += factor * overlap * pair.vector[0];
            state[1] += factor * overlap * pair.vector[1];
        }
        let z = SpinHamiltonian::z_expectation(&state);
        assert!((z - h.exact_z_expectation(t)).abs() < 1e-12);
    }
}
