//! Sawtooth wave oscillator implementation.

/// A naive (band-unlimited) sawtooth oscillator.
///
/// Sample `i` is `2 * (phase - floor(phase + 0.5))` with
/// `phase = frequency * i / sample_rate`: the wave starts at 0.0, rises
/// linearly towards 1.0, drops to -1.0 half way through each cycle and rises
/// back to 0.0. Output lies in [-1.0, 1.0).
///
/// Every sample is computed from its index rather than from an accumulated
/// phase, so rendering is a pure per-index map with no drift.
///
/// A non-positive or non-finite frequency, or a zero sample rate, renders
/// silence.
#[derive(Debug, Clone, PartialEq)]
pub struct SawtoothOscillator {
    frequency: f64,
    sample_rate: u32,
}

impl SawtoothOscillator {
    /// Creates a new sawtooth oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sawtooth wave in Hz
    /// * `sample_rate` - Sample rate in Hz (e.g., 44100 for CD quality)
    ///
    /// # Examples
    ///
    /// ```
    /// use bass::SawtoothOscillator;
    ///
    /// // One full cycle of a 100 Hz saw at 44.1 kHz
    /// let osc = SawtoothOscillator::new(100.0, 44100);
    /// let cycle = osc.render(441);
    /// assert_eq!(cycle.len(), 441);
    /// assert_eq!(cycle[0], 0.0);
    /// ```
    pub fn new(frequency: f64, sample_rate: u32) -> Self {
        Self {
            frequency,
            sample_rate,
        }
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn is_silent(&self) -> bool {
        !(self.frequency.is_finite() && self.frequency > 0.0) || self.sample_rate == 0
    }

    /// Value of the waveform at sample `index`.
    #[inline]
    pub fn sample_at(&self, index: usize) -> f64 {
        if self.is_silent() {
            return 0.0;
        }
        let phase = self.frequency * index as f64 / self.sample_rate as f64;
        2.0 * (phase - (phase + 0.5).floor())
    }

    /// Renders samples `0..length` into a new buffer.
    pub fn render(&self, length: usize) -> Vec<f64> {
        (0..length).map(|i| self.sample_at(i)).collect()
    }
}
