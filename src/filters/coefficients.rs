//! Bilinear-transform coefficients for the second-order Butterworth section.
//!
//! The recurrence the coefficients feed is
//!
//! ```text
//! y[n] = a1*x[n] + a2*x[n-1] + a3*x[n-2] - b1*y[n-1] - b2*y[n-2]
//! ```
//!
//! so `a*` are feed-forward and `b*` are feedback terms, already normalised
//! so the leading feedback coefficient is 1.

use crate::{FilterConfig, PassType};
use std::f64::consts::PI;

/// Coefficient set derived from a [`FilterConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Warped frequency term: `1/tan(πf/fs)` for lowpass, `tan(πf/fs)` for highpass
    pub c: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub b1: f64,
    pub b2: f64,
}

impl Coefficients {
    /// Derives the coefficients for `config`.
    ///
    /// No validation happens here; an out-of-domain configuration yields
    /// whatever the formulas produce, which [`Coefficients::is_finite`] can
    /// then catch.
    ///
    /// # Examples
    ///
    /// ```
    /// use butterworth::{Coefficients, FilterConfig};
    ///
    /// let coefficients = Coefficients::derive(&FilterConfig::lowpass(1000.0, 44100));
    /// assert_eq!(coefficients.a2, 2.0 * coefficients.a1);
    /// assert!((coefficients.dc_gain() - 1.0).abs() < 1e-12);
    /// ```
    pub fn derive(config: &FilterConfig) -> Self {
        let r = config.resonance;
        let warp = (PI * config.frequency / config.sample_rate as f64).tan();

        match config.pass_type {
            PassType::Lowpass => {
                let c = 1.0 / warp;
                let a1 = 1.0 / (1.0 + r * c + c * c);
                Self {
                    c,
                    a1,
                    a2: 2.0 * a1,
                    a3: a1,
                    b1: 2.0 * (1.0 - c * c) * a1,
                    b2: (1.0 - r * c + c * c) * a1,
                }
            }
            PassType::Highpass => {
                let c = warp;
                let a1 = 1.0 / (1.0 + r * c + c * c);
                Self {
                    c,
                    a1,
                    a2: -2.0 * a1,
                    a3: a1,
                    b1: 2.0 * (c * c - 1.0) * a1,
                    b2: (1.0 - r * c + c * c) * a1,
                }
            }
        }
    }

    /// True when every term, including `c`, is a finite number.
    pub fn is_finite(&self) -> bool {
        [self.c, self.a1, self.a2, self.a3, self.b1, self.b2]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Steady-state gain for a constant input.
    pub fn dc_gain(&self) -> f64 {
        (self.a1 + self.a2 + self.a3) / (1.0 + self.b1 + self.b2)
    }

    /// Magnitude of the frequency response at `frequency` Hz.
    ///
    /// Evaluates `|H(e^jω)|` with `ω = 2πf/fs` for
    /// `H(z) = (a1 + a2 z⁻¹ + a3 z⁻²) / (1 + b1 z⁻¹ + b2 z⁻²)`.
    pub fn magnitude_at(&self, frequency: f64, sample_rate: u32) -> f64 {
        let omega = 2.0 * PI * frequency / sample_rate as f64;
        let (sin1, cos1) = omega.sin_cos();
        let (sin2, cos2) = (2.0 * omega).sin_cos();

        let num_re = self.a1 + self.a2 * cos1 + self.a3 * cos2;
        let num_im = -(self.a2 * sin1 + self.a3 * sin2);
        let den_re = 1.0 + self.b1 * cos1 + self.b2 * cos2;
        let den_im = -(self.b1 * sin1 + self.b2 * sin2);

        num_re.hypot(num_im) / den_re.hypot(den_im)
    }
}
