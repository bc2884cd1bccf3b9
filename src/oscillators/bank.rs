//! Detuned oscillator bank.

use super::SawtoothOscillator;
use crate::{Error, Result};

/// A stack of sawtooth voices spread around a fundamental and averaged.
///
/// Each detune offset `d` is relative: the voice runs at
/// `frequency * (1 + d)`. The voices are averaged (each contributes
/// `1 / voice_count` of its sample), so adding voices thickens the sound
/// without raising the level.
#[derive(Debug, Clone)]
pub struct DetunedBank {
    frequency: f64,
    detune: Vec<f64>,
    voices: Vec<SawtoothOscillator>,
}

impl DetunedBank {
    /// Creates a bank of one voice per detune offset.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyDetune` for an empty detune set and
    /// `Error::InvalidParameter` for a non-finite offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use bass::DetunedBank;
    ///
    /// let bank = DetunedBank::new(55.0, &[-0.01, 0.0, 0.01], 44100).unwrap();
    /// assert_eq!(bank.voice_count(), 3);
    /// assert_eq!(bank.render(1024).len(), 1024);
    /// ```
    pub fn new(frequency: f64, detune: &[f64], sample_rate: u32) -> Result<Self> {
        if detune.is_empty() {
            return Err(Error::EmptyDetune);
        }
        if let Some(bad) = detune.iter().find(|d| !d.is_finite()) {
            return Err(Error::invalid(
                "detune",
                format!("offset {bad} is not a finite number"),
            ));
        }

        let voices = detune
            .iter()
            .map(|d| SawtoothOscillator::new(frequency * (1.0 + d), sample_rate))
            .collect();

        Ok(Self {
            frequency,
            detune: detune.to_vec(),
            voices,
        })
    }

    /// Fundamental frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Number of summed voices.
    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    /// The relative detune offsets, in voice order.
    pub fn detune(&self) -> &[f64] {
        &self.detune
    }

    /// The individual voices.
    pub fn voices(&self) -> &[SawtoothOscillator] {
        &self.voices
    }

    /// Renders the averaged voices for samples `0..length`.
    pub fn render(&self, length: usize) -> Vec<f64> {
        let count = self.voices.len() as f64;
        let mut combined = vec![0.0; length];
        for voice in &self.voices {
            for (i, out) in combined.iter_mut().enumerate() {
                *out += voice.sample_at(i) / count;
            }
        }
        combined
    }
}
