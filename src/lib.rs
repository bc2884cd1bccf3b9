//! Bass - an offline bass synthesizer
//!
//! Renders a bass note into one buffer by running a fixed chain of DSP
//! stages: detuned sawtooth oscillators, an ADSR envelope, a one-pole
//! low-pass filter, a drive stage and a hard limiter. The finished buffer is
//! converted to 16-bit PCM and handed to a `PcmSink` (a WAV file with the
//! `wav` feature).
//!
//! ```
//! use std::time::Duration;
//! use bass::{BassPatch, BassPipeline, SynthParams};
//!
//! let params = SynthParams::new(8000, Duration::from_secs(1), 55.0).unwrap();
//! let pcm = BassPipeline::new(params, BassPatch::default())
//!     .unwrap()
//!     .render_pcm();
//! assert_eq!(pcm.len(), 8000);
//! ```

pub mod config;
pub mod core;
pub mod effects;
pub mod envelopes;
mod error;
pub mod filters;
pub mod oscillators;
pub mod pcm;
pub mod pipeline;

// Re-export commonly used types at the crate root
pub use config::SynthParams;
pub use crate::core::{Stage, peak};
pub use effects::{Drive, Limiter};
pub use envelopes::{Adsr, Segment};
pub use error::{Error, Result};
pub use filters::OnePoleLowPass;
pub use oscillators::{DetunedBank, SawtoothOscillator};
#[cfg(feature = "wav")]
pub use pcm::WavSink;
pub use pcm::{PcmFormat, PcmSink};
pub use pipeline::{BassPatch, BassPipeline};
