//! Render parameters.

use std::time::Duration;

use crate::{Error, Result};

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default render length.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);
/// Default fundamental in Hz (A1).
pub const DEFAULT_FREQUENCY: f64 = 55.0;

/// Longest render a 16-bit mono WAV can hold: the data chunk size and the
/// RIFF size (data + 36 byte header remainder) are both `u32`.
pub const MAX_LENGTH: usize = (u32::MAX as usize - 44) / 2;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Immutable, validated description of one render: how fast, how long and
/// at what pitch.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use bass::SynthParams;
///
/// let params = SynthParams::new(44100, Duration::from_millis(500), 55.0).unwrap();
/// assert_eq!(params.length(), 22050);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    sample_rate: u32,
    duration: Duration,
    frequency: f64,
    length: usize,
}

impl SynthParams {
    /// Validates and bundles the render parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` for a zero sample rate, a
    /// non-positive or non-finite frequency, a duration too short to hold
    /// a single sample, or one longer than [`MAX_LENGTH`] samples.
    pub fn new(sample_rate: u32, duration: Duration, frequency: f64) -> Result<Self> {
        if sample_rate == 0 {
            return Err(Error::invalid("sample_rate", "must be greater than zero"));
        }
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(Error::invalid(
                "frequency",
                format!("must be a positive number of Hz, got {frequency}"),
            ));
        }

        let samples = sample_count(sample_rate, duration);
        if samples == 0 {
            return Err(Error::invalid(
                "duration",
                format!("{duration:?} is shorter than one sample at {sample_rate} Hz"),
            ));
        }
        let length = usize::try_from(samples)
            .ok()
            .filter(|&n| n <= MAX_LENGTH)
            .ok_or_else(|| {
                Error::invalid(
                    "duration",
                    format!(
                        "{duration:?} at {sample_rate} Hz is {samples} samples, \
                         more than the {MAX_LENGTH} a WAV file can hold"
                    ),
                )
            })?;

        Ok(Self {
            sample_rate,
            duration,
            frequency,
            length,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Requested render length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fundamental frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Number of samples in every buffer of the render:
    /// `sample_rate * seconds`, truncated.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// `floor(sample_rate * duration)` in exact integer arithmetic.
fn sample_count(sample_rate: u32, duration: Duration) -> u128 {
    sample_rate as u128 * duration.as_nanos() / NANOS_PER_SEC
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION,
            frequency: DEFAULT_FREQUENCY,
            length: DEFAULT_SAMPLE_RATE as usize * DEFAULT_DURATION.as_secs() as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SynthParams::default();
        assert_eq!(params.sample_rate(), 44100);
        assert_eq!(params.duration(), Duration::from_secs(10));
        assert_eq!(params.frequency(), 55.0);
        assert_eq!(params.length(), 441000);
    }

    #[test]
    fn test_length_truncates() {
        let params = SynthParams::new(1000, Duration::from_micros(2500), 55.0).unwrap();
        assert_eq!(params.length(), 2);

        let params = SynthParams::new(44100, Duration::from_millis(1500), 55.0).unwrap();
        assert_eq!(params.length(), 66150);
    }

    #[test]
    fn test_length_is_exact_for_millisecond_durations() {
        for rate in [8000, 11025, 22050, 44100, 48000, 96000] {
            for ms in 1..=5000u64 {
                let params = SynthParams::new(rate, Duration::from_millis(ms), 55.0).unwrap();
                let expected = (rate as u64 * ms / 1000) as usize;
                assert_eq!(params.length(), expected, "{rate} Hz, {ms} ms");
            }
        }
        let params = SynthParams::new(8000, Duration::from_millis(1001), 55.0).unwrap();
        assert_eq!(params.length(), 8008);
    }

    #[test]
    fn test_too_long_rejected() {
        // 14 hours at 44.1 kHz overflows the WAV data size
        let err = SynthParams::new(44100, Duration::from_secs(14 * 3600), 55.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "duration", .. }));
        assert!(SynthParams::new(44100, Duration::MAX, 55.0).is_err());

        let longest = SynthParams::new(1, Duration::from_secs(MAX_LENGTH as u64), 55.0).unwrap();
        assert_eq!(longest.length(), MAX_LENGTH);
        assert!(SynthParams::new(1, Duration::from_secs(MAX_LENGTH as u64 + 1), 55.0).is_err());
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let err = SynthParams::new(0, Duration::from_secs(1), 55.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "sample_rate", .. }));
    }

    #[test]
    fn test_bad_frequency_rejected() {
        for freq in [0.0, -55.0, f64::NAN, f64::INFINITY] {
            let err = SynthParams::new(44100, Duration::from_secs(1), freq).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "frequency", .. }));
        }
    }

    #[test]
    fn test_empty_duration_rejected() {
        let err = SynthParams::new(44100, Duration::ZERO, 55.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "duration", .. }));

        // Shorter than one sample period
        assert!(SynthParams::new(1000, Duration::from_micros(500), 55.0).is_err());
    }
}
