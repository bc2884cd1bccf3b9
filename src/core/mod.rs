//! Core processing abstractions.
//!
//! `Stage` is the whole-buffer processor interface every step of the
//! pipeline after the oscillators implements.

mod stage;

pub(crate) use stage::hard_clip;
pub use stage::{Stage, peak};
