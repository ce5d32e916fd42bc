//! Filter configuration and validation.

use crate::FilterError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which side of the cutoff the filter passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PassType {
    /// Passes content below the cutoff
    Lowpass,
    /// Passes content above the cutoff
    Highpass,
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassType::Lowpass => f.write_str("lowpass"),
            PassType::Highpass => f.write_str("highpass"),
        }
    }
}

impl FromStr for PassType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowpass" | "lp" => Ok(PassType::Lowpass),
            "highpass" | "hp" => Ok(PassType::Highpass),
            _ => Err(FilterError::UnknownPassType(s.to_string())),
        }
    }
}

/// Everything needed to derive a filter's coefficients.
///
/// A configuration is plain data and may hold nonsense; [`FilterConfig::validate`]
/// decides whether a filter can be built from it.
///
/// # Examples
///
/// ```
/// use butterworth::{FilterConfig, PassType};
///
/// let config = FilterConfig::lowpass(1000.0, 44100).with_resonance(0.5);
/// assert_eq!(config.pass_type, PassType::Lowpass);
/// assert_eq!(config.nyquist(), 22050.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig {
    /// Cutoff frequency in Hz
    pub frequency: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
    pub pass_type: PassType,
    /// Damping term. `√2` is maximally flat; smaller values peak at the cutoff.
    #[cfg_attr(feature = "serde", serde(default = "default_resonance"))]
    pub resonance: f64,
}

#[cfg(feature = "serde")]
fn default_resonance() -> f64 {
    FilterConfig::BUTTERWORTH_RESONANCE
}

impl FilterConfig {
    /// Resonance giving the flat Butterworth passband.
    pub const BUTTERWORTH_RESONANCE: f64 = std::f64::consts::SQRT_2;

    /// Creates a configuration from its four parts without validating them.
    pub fn new(frequency: f64, sample_rate: u32, pass_type: PassType, resonance: f64) -> Self {
        Self {
            frequency,
            sample_rate,
            pass_type,
            resonance,
        }
    }

    /// A lowpass configuration with Butterworth resonance.
    pub fn lowpass(frequency: f64, sample_rate: u32) -> Self {
        Self::new(
            frequency,
            sample_rate,
            PassType::Lowpass,
            Self::BUTTERWORTH_RESONANCE,
        )
    }

    /// A highpass configuration with Butterworth resonance.
    pub fn highpass(frequency: f64, sample_rate: u32) -> Self {
        Self::new(
            frequency,
            sample_rate,
            PassType::Highpass,
            Self::BUTTERWORTH_RESONANCE,
        )
    }

    /// Returns this configuration with `resonance` replaced.
    pub fn with_resonance(mut self, resonance: f64) -> Self {
        self.resonance = resonance;
        self
    }

    /// Half the sample rate, in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }

    /// Checks the configuration against the domain of the bilinear transform.
    ///
    /// Rules are checked in order (sample rate, frequency, resonance) and the
    /// first violation is returned.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.sample_rate == 0 {
            return Err(FilterError::InvalidSampleRate {
                sample_rate: self.sample_rate,
            });
        }

        let nyquist = self.nyquist();
        // NaN fails both comparisons
        if !(self.frequency > 0.0 && self.frequency < nyquist) {
            return Err(FilterError::InvalidFrequency {
                frequency: self.frequency,
                nyquist,
            });
        }

        if !(self.resonance.is_finite() && self.resonance > 0.0) {
            return Err(FilterError::InvalidResonance {
                resonance: self.resonance,
            });
        }

        Ok(())
    }
}
