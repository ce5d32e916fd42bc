//! Core sample source trait.
//!
//! This module provides the `Signal` trait that represents any upstream
//! producer of samples, plus `ConstantSignal` for a fixed DC level.

/// Common interface for all sample sources and processors.
///
/// Anything that can hand out samples one at a time implements this: a
/// synthesizer voice, a decoded file, a test fixture, or a filter stage
/// wrapping another signal.
pub trait Signal {
    /// Produces the next sample.
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// A signal that always returns the same value.
///
/// # Examples
///
/// ```
/// use butterworth::{ConstantSignal, Signal};
///
/// let mut dc = ConstantSignal::<44100>(0.5);
/// assert_eq!(dc.next_sample(), 0.5);
///
/// let mut buffer = [0.0; 4];
/// dc.process(&mut buffer);
/// assert_eq!(buffer, [0.5; 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal<const SAMPLE_RATE: u32>(pub f64);

impl<const SAMPLE_RATE: u32> Signal for ConstantSignal<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl<const SAMPLE_RATE: u32> From<f64> for ConstantSignal<SAMPLE_RATE> {
    fn from(value: f64) -> Self {
        ConstantSignal::<SAMPLE_RATE>(value)
    }
}

impl<const SAMPLE_RATE: u32> crate::AudioSignal<SAMPLE_RATE> for ConstantSignal<SAMPLE_RATE> {}
