//! Waveshaping effects applied after filtering.

mod drive;
mod limiter;

pub use drive::Drive;
pub use limiter::Limiter;
