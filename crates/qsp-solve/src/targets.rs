//! Target functions to be approximated by a QSP sequence.
//!
//! Each target is a pure, stateless, deterministic map from the
//! polynomial variable `x = cos θ ∈ [-1, 1]` to a complex value with
//! |f(x)| ≤ 1. The solver is generic over the [`TargetFunction`] seam.

use num_complex::Complex64;
use qsp_core::ThetaGrid;

/// A scalar function of the signal variable to be encoded in a QSP
/// response.
pub trait TargetFunction {
    /// Evaluate the target at `x = cos θ`.
    fn value(&self, x: f64) -> Complex64;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Sample the target on a grid (in grid order).
    fn sample(&self, grid: &ThetaGrid) -> Vec<Complex64> {
        grid.xs().iter().map(|&x| self.value(x)).collect()
    }
}

/// `f(x) = cos(t·x)` — the real part of Hamiltonian evolution
/// `e^{-iHt}` over the spectrum of a normalized Hamiltonian.
#[derive(Debug, Clone, Copy)]
pub struct CosineEvolution {
    /// Evolution time t.
    pub time: f64,
}

impl CosineEvolution {
    /// Create a cosine target for evolution time `t`.
    pub fn new(time: f64) -> Self {
        Self { time }
    }
}

impl TargetFunction for CosineEvolution {
    fn value(&self, x: f64) -> Complex64 {
        Complex64::new((self.time * x).cos(), 0.0)
    }

    fn name(&self) -> &'static str {
        "cos(t·x)"
    }
}

/// `f(x) = sin(t·x)` — the imaginary part of Hamiltonian evolution.
#[derive(Debug, Clone, Copy)]
pub struct SineEvolution {
    /// Evolution time t.
    pub time: f64,
}

impl SineEvolution {
    /// Create a sine target for evolution time `t`.
    pub fn new(time: f64) -> Self {
        Self { time }
    }
}

impl TargetFunction for SineEvolution {
    fn value(&self, x: f64) -> Complex64 {
        Complex64::new((self.time * x).sin(), 0.0)
    }

    fn name(&self) -> &'static str {
        "sin(t·x)"
    }
}

/// `f(x) = s·w(x)·e^{i t x}` — the smoothed coherent one-shot target.
///
/// Fitting the full complex exponential in one sequence removes the
/// need for amplitude amplification of separately-fitted cosine and
/// sine parts. As a function of θ the target depends only on
/// `x = cos θ`, so it is the even extension over θ.
///
/// Two ingredients make the target representable by a `|+><+|`
/// response of even degree: the scale `s` (conventionally 1/√2) leaves
/// headroom under the unitarity bound, and the taper window
/// `w(x) = 1 - e^{-(1-x²)/δ²}` smooths the extension to zero at
/// `x = ±1`, where the imaginary response component carries a forced
/// `√(1-x²)` factor.
#[derive(Debug, Clone, Copy)]
pub struct CoherentOneShot {
    /// Evolution time t.
    pub time: f64,
    /// Uniform magnitude scale s.
    pub scale: f64,
    /// Taper width δ; 0 disables the endpoint taper.
    pub taper: f64,
}

impl CoherentOneShot {
    /// Create a one-shot exponential target with the conventional
    /// scale 1/√2 and taper width 0.2.
    pub fn new(time: f64) -> Self {
        Self {
            time,
            scale: std::f64::consts::FRAC_1_SQRT_2,
            taper: 0.2,
        }
    }

    /// Override the magnitude scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Override the taper width (0 disables the taper).
    #[must_use]
    pub fn with_taper(mut self, taper: f64) -> Self {
        self.taper = taper;
        self
    }

    fn window(&self, x: f64) -> f64 {
        if self.taper == 0.0 {
            1.0
        } else {
            1.0 - (-(1.0 - x * x) / (self.taper * self.taper)).exp()
        }
    }
}

impl TargetFunction for CoherentOneShot {
    fn value(&self, x: f64) -> Complex64 {
        Complex64::from_polar(self.scale * self.window(x), self.time * x)
    }

    fn name(&self) -> &'static str {
        "s·w(x)·exp(i t x)"
    }
}

/// `f(x) = s·erf(k·x)` — a smooth approximation of the sign function.
///
/// Used to implement projective / amplitude-amplification-like
/// operations. Larger `sharpness` k approaches the discontinuous sign
/// function and needs a higher polynomial degree to fit.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedSign {
    /// Steepness k of the transition at x = 0.
    pub sharpness: f64,
    /// Uniform magnitude scale s.
    pub scale: f64,
}

impl SmoothedSign {
    /// Create a smoothed sign target with scale 0.9.
    pub fn new(sharpness: f64) -> Self {
        Self {
            sharpness,
            scale: 0.9,
        }
    }

    /// Override the magnitude scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

impl TargetFunction for SmoothedSign {
    fn value(&self, x: f64) -> Complex64 {
        Complex64::new(self.scale * erf(self.sharpness * x), 0.0)
    }

    fn name(&self) -> &'static str {
        "s·erf(k·x)"
    }
}

/// Error function via the Abramowitz–Stegun 7.1.26 rational
/// approximation (max absolute error 1.5e-7).
fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / (1.0 + P * x);
    let poly = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
    sign * (1.0 - poly * (-x * x).exp())
}
