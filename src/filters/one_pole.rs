//! One-pole low-pass filter.

use std::f64::consts::PI;

use crate::{Error, Result, Stage};

/// Running state of one filter pass: the previous output.
#[derive(Debug, Default)]
struct OnePoleState {
    prev: f64,
}

impl OnePoleState {
    #[inline]
    fn tick(&mut self, alpha: f64, input: f64) -> f64 {
        self.prev += alpha * (input - self.prev);
        self.prev
    }
}

/// First-order recursive low-pass filter.
///
/// `y[i] = y[i-1] + alpha * (x[i] - y[i-1])` with `y[-1] = 0` and
/// `alpha = 2π * cutoff / sample_rate`.
///
/// Every output depends on the previous one, so samples are processed
/// strictly in index order. The coefficient is not normalised: once the
/// cutoff climbs past `sample_rate / 2π` the filter overshoots, and past
/// `sample_rate / π` it oscillates.
///
/// # Examples
///
/// ```
/// use bass::{OnePoleLowPass, Stage};
///
/// let filter = OnePoleLowPass::new(200.0, 44100).unwrap();
/// let smoothed = filter.process(&[1.0, 1.0, 1.0]);
/// assert!(smoothed[0] < smoothed[1] && smoothed[1] < smoothed[2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePoleLowPass {
    cutoff: f64,
    sample_rate: u32,
    alpha: f64,
}

impl OnePoleLowPass {
    /// Creates a filter with the given cutoff in Hz.
    ///
    /// # Errors
    ///
    /// A negative or non-finite cutoff, or a zero sample rate, is rejected
    /// with `Error::InvalidParameter`.
    pub fn new(cutoff: f64, sample_rate: u32) -> Result<Self> {
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(Error::invalid(
                "cutoff",
                format!("must be a non-negative frequency in Hz, got {cutoff}"),
            ));
        }
        if sample_rate == 0 {
            return Err(Error::invalid("sample_rate", "must be greater than zero"));
        }

        Ok(Self {
            cutoff,
            sample_rate,
            alpha: 2.0 * PI * cutoff / sample_rate as f64,
        })
    }

    /// Cutoff frequency in Hz.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The smoothing coefficient.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Stage for OnePoleLowPass {
    fn name(&self) -> &'static str {
        "low-pass"
    }

    fn process(&self, input: &[f64]) -> Vec<f64> {
        let mut state = OnePoleState::default();
        let mut output = Vec::with_capacity(input.len());
        for &sample in input {
            output.push(state.tick(self.alpha, sample));
        }
        output
    }
}
