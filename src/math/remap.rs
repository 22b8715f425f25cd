//! Linear range remapping

use crate::core::{Error, Result};

/// Linearly map `value` from `[low1, high1]` onto `[low2, high2]`.
///
/// The input is not clamped, so values outside the source range extrapolate.
/// A degenerate source range (`high1 == low1`) yields `low2`.
#[inline]
pub fn remap(value: f32, low1: f32, high1: f32, low2: f32, high2: f32) -> f32 {
    let span = high1 - low1;
    if span == 0.0 {
        return low2;
    }
    low2 + (value - low1) * (high2 - low2) / span
}

/// A validated source/target range pair, checked once and applied many times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Remap {
    low1: f32,
    high1: f32,
    low2: f32,
    high2: f32,
}

impl Remap {
    /// Create a remap, rejecting an empty or non-finite source range.
    pub fn new(low1: f32, high1: f32, low2: f32, high2: f32) -> Result<Self> {
        if !(low1.is_finite() && high1.is_finite() && low2.is_finite() && high2.is_finite()) {
            return Err(Error::invalid(format!(
                "remap bounds must be finite (got [{low1}, {high1}] -> [{low2}, {high2}])"
            )));
        }
        if high1 == low1 {
            return Err(Error::invalid(format!(
                "remap source range is empty ({low1} == {high1})"
            )));
        }
        Ok(Self { low1, high1, low2, high2 })
    }

    #[inline]
    pub fn apply(&self, value: f32) -> f32 {
        self.low2 + (value - self.low1) * (self.high2 - self.low2) / (self.high1 - self.low1)
    }
}
