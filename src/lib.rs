//! Butterworth - a second-order lowpass/highpass filter for Rust
//!
//! This library provides a biquad filter whose coefficients come from a
//! bilinear transform of the analog Butterworth prototype, with an adjustable
//! resonance term. It is driven one sample at a time and has no opinion on
//! where samples come from or where they go.

pub mod core;
pub mod error;
pub mod filters;

// Re-export commonly used types at the crate root
pub use crate::core::{AudioSignal, AudioSignalExt, ConstantSignal, Signal};
pub use error::FilterError;
pub use filters::{ButterworthFilter, Coefficients, FilterConfig, Filtered, History, PassType};
