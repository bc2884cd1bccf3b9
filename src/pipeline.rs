//! The fixed bass rendering chain.
//!
//! Detuned bank → ADSR → one-pole low-pass → drive → limiter. Every stage
//! consumes the whole buffer of the one before it.

use log::{debug, info};

use crate::pcm::{self, PcmFormat, PcmSink};
use crate::{
    Adsr, DetunedBank, Drive, Limiter, OnePoleLowPass, Result, Stage, SynthParams, peak,
};

/// Sound-design constants of the bass: everything except pitch, rate and
/// length.
///
/// `BassPatch::default()` is the stock patch: five voices spread ±1%, a
/// 100ms attack, 400ms decay to 60%, 700ms release, a 200 Hz low-pass and a
/// 1.2x drive.
#[derive(Debug, Clone, PartialEq)]
pub struct BassPatch {
    pub detune: Vec<f64>,
    pub attack: f64,
    pub decay: f64,
    pub sustain: f64,
    pub release: f64,
    pub cutoff: f64,
    pub drive: f64,
}

impl Default for BassPatch {
    fn default() -> Self {
        Self {
            detune: vec![-0.01, -0.005, 0.0, 0.005, 0.01],
            attack: 0.1,
            decay: 0.4,
            sustain: 0.6,
            release: 0.7,
            cutoff: 200.0,
            drive: 1.2,
        }
    }
}

impl BassPatch {
    /// Replaces the detune set.
    pub fn with_detune(mut self, detune: Vec<f64>) -> Self {
        self.detune = detune;
        self
    }

    /// Replaces the envelope times (seconds) and sustain level.
    pub fn with_envelope(mut self, attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        self.attack = attack;
        self.decay = decay;
        self.sustain = sustain;
        self.release = release;
        self
    }

    /// Replaces the low-pass cutoff in Hz.
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Replaces the drive gain.
    pub fn with_drive(mut self, drive: f64) -> Self {
        self.drive = drive;
        self
    }
}

/// A validated, ready-to-render bass chain.
///
/// Construction checks every parameter, so `render` cannot fail and never
/// produces NaN from a bad duration or an empty detune set.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use bass::{BassPatch, BassPipeline, SynthParams};
///
/// let params = SynthParams::new(44100, Duration::from_secs(1), 55.0).unwrap();
/// let pipeline = BassPipeline::new(params, BassPatch::default()).unwrap();
/// let samples = pipeline.render();
/// assert_eq!(samples.len(), 44100);
/// assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
/// ```
#[derive(Debug, Clone)]
pub struct BassPipeline {
    params: SynthParams,
    bank: DetunedBank,
    envelope: Adsr,
    filter: OnePoleLowPass,
    drive: Drive,
    limiter: Limiter,
}

impl BassPipeline {
    /// Builds every stage from `params` and `patch`.
    ///
    /// # Errors
    ///
    /// Fails with the first invalid stage parameter: an empty detune set,
    /// non-positive envelope times, a sustain level outside [0, 1], a bad
    /// cutoff or a non-finite drive.
    pub fn new(params: SynthParams, patch: BassPatch) -> Result<Self> {
        let sample_rate = params.sample_rate();
        Ok(Self {
            bank: DetunedBank::new(params.frequency(), &patch.detune, sample_rate)?,
            envelope: Adsr::new(
                patch.attack,
                patch.decay,
                patch.sustain,
                patch.release,
                sample_rate,
            )?,
            filter: OnePoleLowPass::new(patch.cutoff, sample_rate)?,
            drive: Drive::new(patch.drive)?,
            limiter: Limiter,
            params,
        })
    }

    /// Rate, length and pitch this pipeline renders with.
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Output format of `render_pcm`.
    pub fn format(&self) -> PcmFormat {
        PcmFormat::mono16(self.params.sample_rate())
    }

    /// Runs the whole chain and returns the limited buffer.
    pub fn render(&self) -> Vec<f64> {
        let length = self.params.length();
        debug!(
            "rendering {} samples: {} voices at {} Hz, {} Hz sample rate",
            length,
            self.bank.voice_count(),
            self.params.frequency(),
            self.params.sample_rate()
        );

        let mut buffer = self.bank.render(length);
        debug!("oscillators: peak {:.4}", peak(&buffer));

        let stages: [&dyn Stage; 4] = [&self.envelope, &self.filter, &self.drive, &self.limiter];
        for stage in stages {
            buffer = stage.process(&buffer);
            debug!("{}: peak {:.4}", stage.name(), peak(&buffer));
        }

        info!("rendered {} samples", buffer.len());
        buffer
    }

    /// Runs the chain and converts the result to 16-bit PCM.
    pub fn render_pcm(&self) -> Vec<i16> {
        pcm::to_pcm16(&self.render())
    }

    /// Runs the chain and hands the 16-bit result to `sink`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the sink reports, typically `Error::Io`.
    pub fn render_to<S: PcmSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let samples = self.render_pcm();
        sink.write_pcm(self.format(), &samples)
    }
}
