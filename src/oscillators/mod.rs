//! Oscillators for synthesis.
//!
//! This module contains the sawtooth oscillator and the detuned bank built
//! from it.

mod bank;
mod sawtooth;

pub use bank::DetunedBank;
pub use sawtooth::SawtoothOscillator;
