//! Sample stream boundary.
//!
//! The filter itself only consumes and produces `f64` samples. This module
//! provides the traits through which an upstream producer hands samples in:
//! - `Signal` for anything that yields samples one at a time
//! - `AudioSignal` for signals whose sample rate is known at type level
//! - `AudioSignalExt` for attaching a Butterworth stage to such a signal
//! - `ConstantSignal` for a fixed DC value

mod audio;
mod signal;

pub use audio::{AudioSignal, AudioSignalExt};
pub use signal::{ConstantSignal, Signal};
