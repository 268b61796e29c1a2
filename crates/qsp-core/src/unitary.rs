//! 2×2 unitary factors of the QSP recurrence.
//!
//! Only two generators appear in the sequence: the signal operator
//! `W(θ) = e^{iθX}` and the processing rotation `Rz(φ) = e^{iφZ}`.
//! Note the sign convention: these are `e^{+iθ·P}`, not the gate-library
//! `e^{-iθ/2·P}` half-angle form.

use num_complex::Complex64;

/// Tolerance for floating point comparisons.
const EPSILON: f64 = 1e-10;

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy)]
pub struct Unitary2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2 {
    /// Create a new 2x2 matrix from its elements.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// Signal operator `W(θ) = e^{iθX}`.
    ///
    /// With `x = cos θ` this is the standard QSP signal matrix
    /// `[[x, i√(1-x²)], [i√(1-x²), x]]`.
    pub fn signal(theta: f64) -> Self {
        let c = theta.cos();
        let s = theta.sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(0.0, s),
            Complex64::new(0.0, s),
            Complex64::new(c, 0.0),
        )
    }

    /// Processing rotation `Rz(φ) = e^{iφZ} = diag(e^{iφ}, e^{-iφ})`.
    pub fn processing(phi: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, phi),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::from_polar(1.0, -phi),
        )
    }

    /// The generator `iZ = diag(i, -i)`, the derivative of `Rz` at 0.
    pub fn i_z() -> Self {
        Self::new(
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, -1.0),
        )
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Get the conjugate transpose (dagger).
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// Check if this is approximately identity (up to global phase).
    pub fn is_identity(&self) -> bool {
        let [a, b, c, d] = self.data;
        if b.norm() > EPSILON || c.norm() > EPSILON {
            return false;
        }
        (a - d).norm() < EPSILON
    }
}

impl Default for Unitary2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2::mul(&self, &rhs)
    }
}
