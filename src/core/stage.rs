//! Whole-buffer processing stages.

/// A processing stage that maps a finished buffer to a fresh buffer.
///
/// Stages never touch their input: every call allocates its output and any
/// running state lives only for the duration of that call. The output always
/// has the same length as the input.
pub trait Stage {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Processes `input` and returns a new buffer of the same length.
    fn process(&self, input: &[f64]) -> Vec<f64>;
}

/// Largest absolute sample value in `samples`, or 0.0 when empty.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
}

/// Hard clip used by the drive and limiter stages.
#[inline]
pub(crate) fn hard_clip(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}
