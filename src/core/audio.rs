//! Sample-rate-aware signals and the filter extension trait.

use crate::{FilterConfig, FilterError, Filtered, PassType, Signal};

/// A `Signal` whose sample rate is part of its type.
///
/// Encoding the rate as a const generic keeps a filter configured for one
/// rate from being attached to a stream running at another.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 44100 for CD quality, 48000 for pro audio)
///
/// # Examples
///
/// ```
/// use butterworth::{AudioSignal, ConstantSignal};
///
/// let dc = ConstantSignal::<44100>(1.0);
/// assert_eq!(dc.sample_rate(), 44100.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Gets the sample rate of this signal in Hz.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}

/// Extension trait for putting a Butterworth stage behind any audio signal.
///
/// Implemented for every `AudioSignal`. The sample rate is taken from the
/// signal's type, so only the cutoff and resonance need to be supplied.
///
/// # Examples
///
/// ```
/// use butterworth::{AudioSignalExt, ConstantSignal, Signal};
///
/// let dc = ConstantSignal::<44100>(1.0);
/// let mut filtered = dc.butterworth_highpass(1000.0, std::f64::consts::SQRT_2).unwrap();
/// let first = filtered.next_sample();
/// assert!(first > 0.0);
/// ```
pub trait AudioSignalExt<const SAMPLE_RATE: u32>: AudioSignal<SAMPLE_RATE> + Sized {
    /// Filters this signal with a Butterworth section of the given pass type.
    ///
    /// # Arguments
    ///
    /// * `pass_type` - Lowpass or highpass response
    /// * `cutoff` - Cutoff frequency in Hz, strictly between 0 and Nyquist
    /// * `resonance` - Damping term, `> 0`; `√2` gives a flat Butterworth response
    fn butterworth(
        self,
        pass_type: PassType,
        cutoff: f64,
        resonance: f64,
    ) -> Result<Filtered<SAMPLE_RATE, Self>, FilterError> {
        let config = FilterConfig::new(cutoff, SAMPLE_RATE, pass_type, resonance);
        Filtered::new(self, config)
    }

    /// Applies a Butterworth lowpass to this signal.
    fn butterworth_lowpass(
        self,
        cutoff: f64,
        resonance: f64,
    ) -> Result<Filtered<SAMPLE_RATE, Self>, FilterError> {
        self.butterworth(PassType::Lowpass, cutoff, resonance)
    }

    /// Applies a Butterworth highpass to this signal.
    fn butterworth_highpass(
        self,
        cutoff: f64,
        resonance: f64,
    ) -> Result<Filtered<SAMPLE_RATE, Self>, FilterError> {
        self.butterworth(PassType::Highpass, cutoff, resonance)
    }
}

// Blanket implementation for all AudioSignal types
impl<T: AudioSignal<SAMPLE_RATE>, const SAMPLE_RATE: u32> AudioSignalExt<SAMPLE_RATE> for T {}
