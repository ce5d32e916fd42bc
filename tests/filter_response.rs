use butterworth::{ButterworthFilter, FilterConfig, PassType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, SQRT_2};

const SAMPLE_RATE: u32 = 44100;

fn sine(frequency: f64, n: usize) -> f64 {
    (2.0 * PI * frequency * n as f64 / SAMPLE_RATE as f64).sin()
}

/// Runs a unit sine through `filter`, skipping `settle` samples, and returns
/// the largest absolute output over the following `measure` samples.
fn steady_state_peak(
    filter: &mut ButterworthFilter,
    frequency: f64,
    settle: usize,
    measure: usize,
) -> f64 {
    let mut peak: f64 = 0.0;
    for n in 0..settle + measure {
        let y = filter.tick(sine(frequency, n));
        if n >= settle {
            peak = peak.max(y.abs());
        }
    }
    peak
}

#[test]
fn test_lowpass_dc_converges_to_input() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::lowpass(1000.0, SAMPLE_RATE, 1.4142135)?;
    for _ in 0..1000 {
        filter.update(1.0);
    }
    assert!(
        (filter.value() - 1.0).abs() < 1e-4,
        "Expected DC to pass, got {}",
        filter.value()
    );
    Ok(())
}

#[test]
fn test_highpass_dc_converges_to_zero() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::highpass(1000.0, SAMPLE_RATE, 1.4142135)?;
    for _ in 0..1000 {
        filter.update(1.0);
    }
    assert!(
        filter.value().abs() < 1e-4,
        "Expected DC blocking, got {}",
        filter.value()
    );
    Ok(())
}

#[test]
fn test_lowpass_passband_gain_near_unity() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::lowpass(5000.0, SAMPLE_RATE, SQRT_2)?;
    let peak = steady_state_peak(&mut filter, 100.0, 4410, 4410);
    assert!((peak - 1.0).abs() < 0.01, "Expected pass-through, got {}", peak);
    Ok(())
}

#[test]
fn test_highpass_passband_gain_near_unity() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::highpass(100.0, SAMPLE_RATE, SQRT_2)?;
    let peak = steady_state_peak(&mut filter, 5000.0, 4410, 4410);
    assert!((peak - 1.0).abs() < 0.01, "Expected pass-through, got {}", peak);
    Ok(())
}

#[test]
fn test_lowpass_attenuates_high_frequencies() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::lowpass(200.0, SAMPLE_RATE, SQRT_2)?;
    let peak = steady_state_peak(&mut filter, 10000.0, 4410, 4410);
    // 12 dB/octave rolloff, over five octaves above the cutoff
    assert!(peak < 0.01, "Expected attenuation, got {}", peak);
    Ok(())
}

#[test]
fn test_highpass_attenuates_low_frequencies() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::highpass(5000.0, SAMPLE_RATE, SQRT_2)?;
    let peak = steady_state_peak(&mut filter, 100.0, 4410, 4410);
    assert!(peak < 0.01, "Expected attenuation, got {}", peak);
    Ok(())
}

#[test]
fn test_low_resonance_peaks_at_cutoff() -> anyhow::Result<()> {
    for pass_type in [PassType::Lowpass, PassType::Highpass] {
        let config = FilterConfig::new(1000.0, SAMPLE_RATE, pass_type, 0.5);
        let mut filter = ButterworthFilter::new(config)?;
        let peak = steady_state_peak(&mut filter, 1000.0, 22050, 4410);
        assert!(
            (peak - 2.0).abs() < 0.02,
            "{} with resonance 0.5 should reach 2x at cutoff, got {}",
            pass_type,
            peak
        );
    }
    Ok(())
}

#[test]
fn test_measured_gain_matches_magnitude_response() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::lowpass(3000.0, SAMPLE_RATE, 0.9)?;
    let expected = filter.coefficients().magnitude_at(2000.0, SAMPLE_RATE);
    let peak = steady_state_peak(&mut filter, 2000.0, 8820, 4410);
    assert!(
        (peak - expected).abs() < 0.01,
        "Measured {} vs predicted {}",
        peak,
        expected
    );
    Ok(())
}

#[test]
fn test_identical_filters_are_bit_identical() -> anyhow::Result<()> {
    let config = FilterConfig::highpass(750.0, 48000).with_resonance(0.3);
    let mut a = ButterworthFilter::new(config)?;
    let mut b = ButterworthFilter::new(config)?;

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let x: f64 = rng.gen_range(-1.0..1.0);
        assert_eq!(a.tick(x).to_bits(), b.tick(x).to_bits());
    }
    Ok(())
}

#[test]
fn test_interleaved_instances_do_not_interfere() -> anyhow::Result<()> {
    let mut left = ButterworthFilter::lowpass(1200.0, SAMPLE_RATE, SQRT_2)?;
    let mut right = ButterworthFilter::lowpass(1200.0, SAMPLE_RATE, SQRT_2)?;
    let mut solo = ButterworthFilter::lowpass(1200.0, SAMPLE_RATE, SQRT_2)?;

    for n in 0..500 {
        let x = sine(440.0, n);
        left.update(x);
        right.update(-3.0 * x);
        assert_eq!(left.value(), solo.tick(x));
    }
    assert_ne!(left.value(), right.value());
    Ok(())
}

#[test]
fn test_update_order_matches_manual_recurrence() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::highpass(2500.0, SAMPLE_RATE, 0.7)?;
    let k = *filter.coefficients();

    let inputs = [0.25, -1.0, 0.5];
    let (mut x1, mut x2) = (0.0, 0.0);
    let (mut y1, mut y2) = (0.0, 0.0);

    for &x in &inputs {
        let y = k.a1 * x + k.a2 * x1 + k.a3 * x2 - k.b1 * y1 - k.b2 * y2;
        x2 = x1;
        x1 = x;
        y2 = y1;
        y1 = y;

        filter.update(x);
        assert_eq!(filter.value(), y);
    }

    assert_eq!(filter.history().input(), &[x1, x2]);
    assert_eq!(filter.history().output()[..2], [y1, y2]);
    Ok(())
}

#[test]
fn test_bounded_input_gives_bounded_output() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let nyquist = SAMPLE_RATE as f64 / 2.0;

    for pass_type in [PassType::Lowpass, PassType::Highpass] {
        for frequency in [1.0, 50.0, 1000.0, 11025.0, nyquist - 50.0, nyquist - 1.0] {
            for resonance in [0.1, 0.5, SQRT_2, 5.0] {
                let config = FilterConfig::new(frequency, SAMPLE_RATE, pass_type, resonance);
                let mut filter = ButterworthFilter::new(config)?;

                for _ in 0..20_000 {
                    let y = filter.tick(rng.gen_range(-1.0..1.0));
                    assert!(
                        y.is_finite() && y.abs() < 1000.0,
                        "{:?} became unstable: {}",
                        config,
                        y
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn test_silence_stays_silent() -> anyhow::Result<()> {
    let mut filter = ButterworthFilter::lowpass(440.0, SAMPLE_RATE, 0.2)?;
    let mut buffer = [0.0; 256];
    filter.process(&mut buffer);
    assert!(buffer.iter().all(|&y| y == 0.0));
    Ok(())
}
