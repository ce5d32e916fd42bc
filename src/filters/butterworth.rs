//! Second-order Butterworth filter.
//!
//! [`ButterworthFilter`] is driven one sample at a time: call
//! [`update`](ButterworthFilter::update) with each incoming sample, in arrival
//! order, and read the result back with [`value`](ButterworthFilter::value).
//! Coefficients are derived once from the [`FilterConfig`] at construction;
//! a different cutoff, rate, mode or resonance needs a new instance.
//!
//! [`Filtered`] wraps an upstream [`Signal`] so the filter can sit in a pull
//! chain instead of being fed by hand.

use crate::{AudioSignal, Coefficients, FilterConfig, FilterError, History, PassType, Signal};

/// A biquad section with Butterworth-style lowpass or highpass response.
///
/// Each instance owns its own history, so independent channels each need
/// their own filter.
///
/// # Examples
///
/// ```
/// use butterworth::ButterworthFilter;
///
/// let mut filter = ButterworthFilter::lowpass(1000.0, 44100, std::f64::consts::SQRT_2)?;
/// for _ in 0..1000 {
///     filter.update(1.0);
/// }
/// assert!((filter.value() - 1.0).abs() < 1e-4);
/// # Ok::<(), butterworth::FilterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ButterworthFilter {
    config: FilterConfig,
    coefficients: Coefficients,
    history: History,
}

impl ButterworthFilter {
    /// Builds a filter, validating the configuration first.
    ///
    /// Fails with the matching [`FilterError`] for an out-of-domain
    /// configuration, or with [`FilterError::DegenerateCoefficients`] when a
    /// valid configuration still derives NaN or infinite terms.
    pub fn new(config: FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let coefficients = Coefficients::derive(&config);
        if !coefficients.is_finite() {
            log::warn!(
                "rejecting {} filter at {} Hz / {} Hz: coefficients not finite ({:?})",
                config.pass_type,
                config.frequency,
                config.sample_rate,
                coefficients
            );
            return Err(FilterError::DegenerateCoefficients(coefficients));
        }

        log::debug!(
            "{} filter at {} Hz / {} Hz, resonance {}: {:?}",
            config.pass_type,
            config.frequency,
            config.sample_rate,
            config.resonance,
            coefficients
        );

        Ok(Self {
            config,
            coefficients,
            history: History::new(),
        })
    }

    /// Creates a lowpass filter.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Cutoff in Hz, strictly between 0 and `sample_rate / 2`
    /// * `sample_rate` - Sample rate in Hz
    /// * `resonance` - `√2` for a flat passband, down to ~0.1 for a sharp peak
    pub fn lowpass(frequency: f64, sample_rate: u32, resonance: f64) -> Result<Self, FilterError> {
        Self::new(FilterConfig::new(
            frequency,
            sample_rate,
            PassType::Lowpass,
            resonance,
        ))
    }

    /// Creates a highpass filter. Arguments as for [`ButterworthFilter::lowpass`].
    pub fn highpass(frequency: f64, sample_rate: u32, resonance: f64) -> Result<Self, FilterError> {
        Self::new(FilterConfig::new(
            frequency,
            sample_rate,
            PassType::Highpass,
            resonance,
        ))
    }

    /// Feeds one input sample through the filter.
    pub fn update(&mut self, input: f64) {
        let k = &self.coefficients;
        let x = self.history.input();
        let y = self.history.output();

        // Must use the history from before this sample is recorded.
        let output = k.a1 * input + k.a2 * x[0] + k.a3 * x[1] - k.b1 * y[0] - k.b2 * y[1];

        self.history.push(input, output);
    }

    /// The most recently computed output, or 0.0 before the first update.
    pub fn value(&self) -> f64 {
        self.history.latest()
    }

    /// Updates with `input` and returns the new output.
    pub fn tick(&mut self, input: f64) -> f64 {
        self.update(input);
        self.value()
    }

    /// Filters `buffer` in place, one sample at a time from the front.
    pub fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.tick(*sample);
        }
    }

    /// Clears the sample history. Coefficients are kept.
    pub fn reset(&mut self) {
        log::trace!("resetting {} filter history", self.config.pass_type);
        self.history.clear();
    }

    /// The configuration the coefficients were derived from.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// The coefficient set, fixed for the life of the filter.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Recent inputs and outputs, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl TryFrom<FilterConfig> for ButterworthFilter {
    type Error = FilterError;

    fn try_from(config: FilterConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

/// A [`ButterworthFilter`] pulling its input from another signal.
///
/// Usually built through [`AudioSignalExt`](crate::AudioSignalExt).
pub struct Filtered<const SAMPLE_RATE: u32, S: Signal> {
    source: S,
    filter: ButterworthFilter,
}

impl<const SAMPLE_RATE: u32, S: Signal> Filtered<SAMPLE_RATE, S> {
    /// Wraps `source` with a filter built from `config`.
    ///
    /// The configuration's sample rate must equal `SAMPLE_RATE`; a mismatch
    /// is reported as [`FilterError::SampleRateMismatch`].
    pub fn new(source: S, config: FilterConfig) -> Result<Self, FilterError> {
        if config.sample_rate != SAMPLE_RATE {
            return Err(FilterError::SampleRateMismatch {
                expected: SAMPLE_RATE,
                actual: config.sample_rate,
            });
        }
        Ok(Self {
            source,
            filter: ButterworthFilter::new(config)?,
        })
    }

    /// The wrapped filter.
    pub fn filter(&self) -> &ButterworthFilter {
        &self.filter
    }

    /// Mutable access to the wrapped filter, e.g. to reset it between passages.
    pub fn filter_mut(&mut self) -> &mut ButterworthFilter {
        &mut self.filter
    }

    /// Gives back the upstream signal, dropping the filter state.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<const SAMPLE_RATE: u32, S: Signal> Signal for Filtered<SAMPLE_RATE, S> {
    fn next_sample(&mut self) -> f64 {
        let input = self.source.next_sample();
        self.filter.tick(input)
    }
}

impl<const SAMPLE_RATE: u32, S: Signal> AudioSignal<SAMPLE_RATE> for Filtered<SAMPLE_RATE, S> {}
