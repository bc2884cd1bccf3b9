//! Filters.

mod one_pole;

pub use one_pole::OnePoleLowPass;
