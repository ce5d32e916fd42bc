use crate::Coefficients;
use std::fmt;

/// Reasons a filter cannot be built from a configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// The sample rate was zero.
    InvalidSampleRate { sample_rate: u32 },
    /// A configuration built for one sample rate was attached to a stream at another.
    SampleRateMismatch { expected: u32, actual: u32 },
    /// The cutoff was not strictly between 0 and Nyquist, or was not finite.
    InvalidFrequency { frequency: f64, nyquist: f64 },
    /// The resonance was not finite and positive.
    InvalidResonance { resonance: f64 },
    /// A pass type name that is neither lowpass nor highpass.
    UnknownPassType(String),
    /// The configuration passed validation but the derived terms are NaN or infinite.
    DegenerateCoefficients(Coefficients),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidSampleRate { sample_rate } => {
                write!(f, "Sample rate must be positive, got {sample_rate}")
            }
            FilterError::SampleRateMismatch { expected, actual } => write!(
                f,
                "Config sample rate {actual} Hz does not match stream sample rate {expected} Hz"
            ),
            FilterError::InvalidFrequency { frequency, nyquist } => write!(
                f,
                "Cutoff frequency {frequency} Hz is outside (0, {nyquist}) Hz"
            ),
            FilterError::InvalidResonance { resonance } => {
                write!(f, "Resonance must be finite and positive, got {resonance}")
            }
            FilterError::UnknownPassType(name) => write!(f, "Unknown pass type '{name}'"),
            FilterError::DegenerateCoefficients(c) => write!(
                f,
                "Derived coefficients are not finite: c={} a1={} a2={} a3={} b1={} b2={}",
                c.c, c.a1, c.a2, c.a3, c.b1, c.b2
            ),
        }
    }
}

impl std::error::Error for FilterError {}
