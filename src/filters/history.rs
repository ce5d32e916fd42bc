//! Sample history for the recurrence.

/// The most recent inputs and outputs, newest first.
///
/// Only `input[0..2]` and `output[0..2]` feed the recurrence. `output[2]`
/// is shifted along with the others and can be inspected, but nothing
/// reads it back.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct History {
    input: [f64; 2],
    output: [f64; 3],
}

impl History {
    /// An all-zero history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one processed sample, discarding the oldest entries.
    pub fn push(&mut self, input: f64, output: f64) {
        self.input[1] = self.input[0];
        self.input[0] = input;

        self.output[2] = self.output[1];
        self.output[1] = self.output[0];
        self.output[0] = output;
    }

    /// Last two inputs, newest first.
    pub fn input(&self) -> &[f64; 2] {
        &self.input
    }

    /// Last three outputs, newest first.
    pub fn output(&self) -> &[f64; 3] {
        &self.output
    }

    /// Most recent output, 0.0 before anything has been pushed.
    pub fn latest(&self) -> f64 {
        self.output[0]
    }

    /// Zeroes every input and output slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
