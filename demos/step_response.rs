use butterworth::{AudioSignalExt, ButterworthFilter, ConstantSignal, Signal};
use std::f64::consts::SQRT_2;

fn main() -> anyhow::Result<()> {
    const SAMPLE_RATE: u32 = 44100;
    let cutoff = 1000.0;

    println!("Butterworth step response (cutoff: {cutoff} Hz, resonance: √2)\n");

    // Example 1: Low-pass step response
    println!("1. Low-pass, constant input 1.0");
    let mut lowpass = ConstantSignal::<SAMPLE_RATE>(1.0).butterworth_lowpass(cutoff, SQRT_2)?;
    print!("   Samples: ");
    for _ in 0..10 {
        print!("{:.3} ", lowpass.next_sample());
    }
    for _ in 10..1000 {
        lowpass.next_sample();
    }
    println!("\n   After 1000 samples: {:.6}\n", lowpass.filter().value());

    // Example 2: High-pass step response
    println!("2. High-pass, constant input 1.0");
    let mut highpass = ConstantSignal::<SAMPLE_RATE>(1.0).butterworth_highpass(cutoff, SQRT_2)?;
    print!("   Samples: ");
    for _ in 0..10 {
        print!("{:.3} ", highpass.next_sample());
    }
    for _ in 10..1000 {
        highpass.next_sample();
    }
    println!("\n   After 1000 samples: {:.6}\n", highpass.filter().value());

    // Example 3: Magnitude response for a few resonance settings
    println!("3. Low-pass magnitude (dB)");
    let probes = [100.0, 500.0, 1000.0, 2000.0, 8000.0];
    print!("   {:>10}", "resonance");
    for f in probes {
        print!("{:>9}", format!("{f} Hz"));
    }
    println!();
    for resonance in [SQRT_2, 1.0, 0.5, 0.2] {
        let filter = ButterworthFilter::lowpass(cutoff, SAMPLE_RATE, resonance)?;
        print!("   {:>10.3}", resonance);
        for f in probes {
            let gain = filter.coefficients().magnitude_at(f, SAMPLE_RATE);
            print!("{:>9.2}", 20.0 * gain.log10());
        }
        println!();
    }

    Ok(())
}
