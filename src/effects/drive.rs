//! Drive effect: gain followed by a hard clip.

use crate::core::hard_clip;
use crate::{Error, Result, Stage};

/// Multiplies every sample by `gain`, then clips to [-1.0, 1.0].
///
/// Pushing the gain above 1.0 flattens the peaks of the waveform and adds
/// harmonics. Each sample is handled on its own; there is no state.
///
/// # Examples
///
/// ```
/// use bass::{Drive, Stage};
///
/// let drive = Drive::new(1.0).unwrap();
/// assert_eq!(drive.process(&[2.0, -2.0, 0.5]), vec![1.0, -1.0, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drive {
    gain: f64,
}

impl Drive {
    /// Creates a drive stage.
    ///
    /// # Errors
    ///
    /// A non-finite gain is rejected with `Error::InvalidParameter`.
    pub fn new(gain: f64) -> Result<Self> {
        if !gain.is_finite() {
            return Err(Error::invalid(
                "drive",
                format!("gain must be a finite number, got {gain}"),
            ));
        }
        Ok(Self { gain })
    }

    /// Linear gain applied before clipping.
    pub fn gain(&self) -> f64 {
        self.gain
    }
}

impl Stage for Drive {
    fn name(&self) -> &'static str {
        "drive"
    }

    fn process(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&s| hard_clip(s * self.gain)).collect()
    }
}
