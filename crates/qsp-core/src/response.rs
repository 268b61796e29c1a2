//! QSP response evaluation and its phase gradients.
//!
//! The recurrence for a degree-`d` sequence `[φ₀, …, φ_d]` at signal
//! angle θ is
//!
//!   U(θ; φ) = Rz(φ₀) · ∏_{k=1..d} [ W(θ) · Rz(φ_k) ]
//!
//! and the scalar response is a projection of `U` chosen by the
//! measurement convention. With `x = cos θ` the `|0><0|` response is the
//! polynomial `P(x)` of the Gilyén et al. representation.
//!
//! For fitting, the gradient of the response with respect to each phase
//! is available in closed form: `∂Rz(φ)/∂φ = Rz(φ)·iZ`, so
//!
//!   ∂U/∂φ_k = [A₀…A_k] · iZ · [A_{k+1}…A_d]
//!
//! which one pass of prefix and suffix products evaluates in O(d).

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::ThetaGrid;
use crate::phases::PhaseSequence;
use crate::unitary::Unitary2;

/// Measurement convention selecting the scalar response of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convention {
    /// `|0><0|` — response is the full complex `P(x) = u₀₀`.
    ZeroZero,
    /// `|+><+|` — response is `Re[P(x)] + i·Re[Q(x)]√(1-x²)`,
    /// i.e. `Re(u₀₀) + i·Im(u₀₁)`.
    PlusPlus,
}

impl Convention {
    /// Project the sequence unitary onto the scalar response.
    fn project(self, u: &Unitary2) -> Complex64 {
        match self {
            Convention::ZeroZero => u.data[0],
            Convention::PlusPlus => Complex64::new(u.data[0].re, u.data[1].im),
        }
    }
}

/// Evaluate the recurrence at a single signal angle θ.
pub fn qsp_response(phases: &PhaseSequence, theta: f64, convention: Convention) -> Complex64 {
    let w = Unitary2::signal(theta);
    let angles = phases.angles();

    let mut u = Unitary2::processing(angles[0]);
    for &phi in &angles[1..] {
        u = u * w;
        u = u * Unitary2::processing(phi);
    }
    convention.project(&u)
}

/// Evaluate the recurrence at every point of a grid.
pub fn response_on_grid(
    phases: &PhaseSequence,
    grid: &ThetaGrid,
    convention: Convention,
) -> Vec<Complex64> {
    debug!(
        degree = phases.degree(),
        n_samples = grid.len(),
        ?convention,
        "evaluating QSP response on grid"
    );
    grid.thetas()
        .iter()
        .map(|&theta| qsp_response(phases, theta, convention))
        .collect()
}

/// Evaluate the response and its partial derivatives w.r.t. each phase.
///
/// Returns `(response, gradient)` where `gradient[k] = ∂r/∂φ_k` as a
/// complex number (the derivative of a real parameter acts separately on
/// the real and imaginary parts of the projection).
pub fn response_gradient(
    phases: &PhaseSequence,
    theta: f64,
    convention: Convention,
) -> (Complex64, Vec<Complex64>) {
    let w = Unitary2::signal(theta);
    let angles = phases.angles();
    let n = angles.len();

    // Recurrence factors: A₀ = Rz(φ₀), A_k = W·Rz(φ_k) for k ≥ 1.
    let factors: Vec<Unitary2> = angles
        .iter()
        .enumerate()
        .map(|(k, &phi)| {
            let rz = Unitary2::processing(phi);
            if k == 0 { rz } else { w * rz }
        })
        .collect();

    // prefix[k] = A₀…A_k
    let mut prefix = Vec::with_capacity(n);
    let mut acc = Unitary2::identity();
    for factor in &factors {
        acc = acc * *factor;
        prefix.push(acc);
    }

    // suffix[k] = A_k…A_d, suffix[n] = I
    let mut suffix = vec![Unitary2::identity(); n + 1];
    for k in (0..n).rev() {
        suffix[k] = factors[k] * suffix[k + 1];
    }

    let iz = Unitary2::i_z();
    let gradient = (0..n)
        .map(|k| {
            let du = prefix[k] * iz * suffix[k + 1];
            match convention {
                Convention::ZeroZero => du.data[0],
                Convention::PlusPlus => Complex64::new(du.data[0].re, du.data[1].im),
            }
        })
        .collect();

    (convention.project(&prefix[n - 1]), gradient)
}
