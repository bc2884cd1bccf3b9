//! ADSR (Attack, Decay, Sustain, Release) envelope shaper.

use crate::{Error, Result, Stage};

/// Region of the envelope a point in time falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Ramping from 0 to 1
    Attack,
    /// Ramping from 1 to the sustain level
    Decay,
    /// Holding at the sustain level
    Sustain,
    /// Ramping from the sustain level to 0 at the end of the buffer
    Release,
}

/// ADSR envelope laid out over the whole length of a buffer.
///
/// The attack and decay run from the start of the buffer, the release ends
/// exactly at the end of the buffer, and the sustain level fills the gap. All
/// ramps are linear.
///
/// Regions are tested in priority order (attack, decay, sustain, release)
/// with strict `<` comparisons. When `attack + decay + release` is longer
/// than the buffer the regions overlap in time; every sample still lands in
/// exactly one region, so the gain can jump where the decay hands over to the
/// release.
///
/// # Examples
///
/// ```
/// use bass::{Adsr, Stage};
///
/// // 100ms attack, 400ms decay, 60% sustain, 700ms release
/// let env = Adsr::new(0.1, 0.4, 0.6, 0.7, 44100).unwrap();
/// let shaped = env.process(&vec![1.0; 88200]);
/// assert_eq!(shaped[0], 0.0);
/// assert_eq!(shaped[30000], 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    attack: f64,
    decay: f64,
    sustain: f64,
    release: f64,
    sample_rate: u32,
}

impl Adsr {
    /// Creates a new envelope.
    ///
    /// # Arguments
    ///
    /// * `attack` - Attack time in seconds (> 0)
    /// * `decay` - Decay time in seconds (> 0)
    /// * `sustain` - Sustain level (0.0 to 1.0)
    /// * `release` - Release time in seconds (> 0)
    /// * `sample_rate` - Sample rate in Hz (> 0)
    ///
    /// # Errors
    ///
    /// Zero, negative or non-finite times, a sustain level outside [0, 1] and
    /// a zero sample rate are rejected with `Error::InvalidParameter`. The
    /// ramps divide by their durations, so there is no zero-length fallback.
    pub fn new(
        attack: f64,
        decay: f64,
        sustain: f64,
        release: f64,
        sample_rate: u32,
    ) -> Result<Self> {
        for (name, time) in [("attack", attack), ("decay", decay), ("release", release)] {
            if !time.is_finite() || time <= 0.0 {
                return Err(Error::invalid(
                    name,
                    format!("duration must be a positive number of seconds, got {time}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&sustain) {
            return Err(Error::invalid(
                "sustain",
                format!("level must be between 0 and 1, got {sustain}"),
            ));
        }
        if sample_rate == 0 {
            return Err(Error::invalid("sample_rate", "must be greater than zero"));
        }

        Ok(Self {
            attack,
            decay,
            sustain,
            release,
            sample_rate,
        })
    }

    /// Attack time in seconds.
    pub fn attack(&self) -> f64 {
        self.attack
    }

    /// Decay time in seconds.
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Sustain level in [0, 1].
    pub fn sustain(&self) -> f64 {
        self.sustain
    }

    /// Release time in seconds.
    pub fn release(&self) -> f64 {
        self.release
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The region that time `t` falls into for a buffer lasting `total` seconds.
    pub fn segment_at(&self, t: f64, total: f64) -> Segment {
        if t < self.attack {
            Segment::Attack
        } else if t < self.attack + self.decay {
            Segment::Decay
        } else if t < total - self.release {
            Segment::Sustain
        } else {
            Segment::Release
        }
    }

    /// Gain at time `t` (seconds) for a buffer lasting `total` seconds.
    pub fn gain_at(&self, t: f64, total: f64) -> f64 {
        match self.segment_at(t, total) {
            Segment::Attack => t / self.attack,
            Segment::Decay => 1.0 - (t - self.attack) / self.decay * (1.0 - self.sustain),
            Segment::Sustain => self.sustain,
            Segment::Release => {
                let release_start = total - self.release;
                self.sustain * (1.0 - (t - release_start) / self.release)
            }
        }
    }
}

impl Stage for Adsr {
    fn name(&self) -> &'static str {
        "envelope"
    }

    fn process(&self, input: &[f64]) -> Vec<f64> {
        let sample_rate = self.sample_rate as f64;
        let total = input.len() as f64 / sample_rate;
        input
            .iter()
            .enumerate()
            .map(|(i, &sample)| sample * self.gain_at(i as f64 / sample_rate, total))
            .collect()
    }
}
