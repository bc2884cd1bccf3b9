//! Amplitude envelopes.

mod adsr;

pub use adsr::{Adsr, Segment};
