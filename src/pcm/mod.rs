//! 16-bit PCM conversion and the sink interface handed the finished samples.
//!
//! The synthesis core only knows about `PcmSink`. Encoders live behind it;
//! the WAV encoder (`WavSink`) needs the `wav` feature.

#[cfg(feature = "wav")]
mod wav;

#[cfg(feature = "wav")]
pub use wav::WavSink;

use crate::Result;

/// Channel count of every render.
pub const CHANNELS: u16 = 1;
/// Bit depth of every render.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Shape of the integer samples handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// Mono 16-bit at `sample_rate`.
    pub fn mono16(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: CHANNELS,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }
}

/// Destination for a finished buffer of integer samples.
pub trait PcmSink {
    /// Writes every sample and finalises the output.
    fn write_pcm(&mut self, format: PcmFormat, samples: &[i16]) -> Result<()>;
}

impl PcmSink for Vec<i16> {
    fn write_pcm(&mut self, _format: PcmFormat, samples: &[i16]) -> Result<()> {
        self.extend_from_slice(samples);
        Ok(())
    }
}

/// Converts one sample to 16-bit: scale by `i16::MAX` and truncate toward
/// zero. Out-of-range input saturates instead of wrapping.
#[inline]
pub fn sample_to_i16(sample: f64) -> i16 {
    (sample * i16::MAX as f64) as i16
}

/// Converts a whole buffer with [`sample_to_i16`].
pub fn to_pcm16(samples: &[f64]) -> Vec<i16> {
    samples.iter().map(|&s| sample_to_i16(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale() {
        assert_eq!(sample_to_i16(1.0), 32767);
        assert_eq!(sample_to_i16(-1.0), -32767);
        assert_eq!(sample_to_i16(0.0), 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5
        assert_eq!(sample_to_i16(0.5), 16383);
        assert_eq!(sample_to_i16(-0.5), -16383);
        assert_eq!(sample_to_i16(1e-6), 0);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(sample_to_i16(2.0), i16::MAX);
        assert_eq!(sample_to_i16(-2.0), i16::MIN);
        assert_eq!(sample_to_i16(f64::NAN), 0);
    }

    #[test]
    fn test_to_pcm16() {
        assert_eq!(to_pcm16(&[1.0, -1.0, 0.5]), vec![32767, -32767, 16383]);
    }

    #[test]
    fn test_mono16_format() {
        let format = PcmFormat::mono16(48000);
        assert_eq!(format.sample_rate, 48000);
        assert_eq!(format.channels, 1);
        assert_eq!(format.bits_per_sample, 16);
    }

    #[test]
    fn test_vec_sink_collects_samples() {
        let mut sink: Vec<i16> = Vec::new();
        sink.write_pcm(PcmFormat::mono16(44100), &[1, 2, 3]).unwrap();
        assert_eq!(sink, vec![1, 2, 3]);
    }
}
