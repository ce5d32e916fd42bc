//! Butterworth filtering.
//!
//! The primary type is [`ButterworthFilter`], a second-order recursive
//! section with lowpass or highpass response. Its pieces live in their own
//! modules:
//! - [`FilterConfig`] and [`PassType`] describe what to build
//! - [`Coefficients`] holds the bilinear-transform terms derived from a config
//! - [`History`] holds the last few inputs and outputs

mod butterworth;
mod coefficients;
mod config;
mod history;

pub use self::butterworth::{ButterworthFilter, Filtered};
pub use self::coefficients::Coefficients;
pub use self::config::{FilterConfig, PassType};
pub use self::history::History;
