//! Hard limiter.

use crate::Stage;
use crate::core::hard_clip;

/// Clips every sample to [-1.0, 1.0] without any gain stage.
///
/// Samples already inside the range pass through untouched, which makes the
/// limiter idempotent. It is the last stage before 16-bit conversion.
///
/// # Examples
///
/// ```
/// use bass::{Limiter, Stage};
///
/// assert_eq!(Limiter.process(&[1.5, -1.5, 0.3]), vec![1.0, -1.0, 0.3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limiter;

impl Stage for Limiter {
    fn name(&self) -> &'static str {
        "limiter"
    }

    fn process(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&s| hard_clip(s)).collect()
    }
}
