//! Core trait shared by number sources that draw without replacement.
//!
//! [`UniqueNumberSampler`](crate::UniqueNumberSampler) is the built-in
//! implementation. The trait lets helpers such as
//! [`Draws`](crate::samplers::Draws) and the functions in [`crate::api`]
//! stay independent of the concrete sampler and its random source.

use crate::error::Result;
use crate::types::Number;

/// Source of numbers drawn without replacement until exhausted.
pub trait NumberSource {
    /// Count of numbers still available to draw.
    fn remaining_count(&self) -> usize;

    /// Draw one number, removing it from the source.
    ///
    /// Fails with [`SamplerError::InvalidState`](crate::SamplerError::InvalidState)
    /// when `remaining_count() == 0`; a failed call changes nothing.
    fn sample(&mut self) -> Result<Number>;

    /// `true` once every number has been drawn.
    fn is_exhausted(&self) -> bool {
        self.remaining_count() == 0
    }
}

impl<S: NumberSource + ?Sized> NumberSource for &mut S {
    fn remaining_count(&self) -> usize {
        (**self).remaining_count()
    }

    fn sample(&mut self) -> Result<Number> {
        (**self).sample()
    }
}

/// Draw every remaining number from `source` into `out`, in draw order.
///
/// Returns how many numbers were appended.
pub fn drain_into<S: NumberSource + ?Sized>(source: &mut S, out: &mut Vec<Number>) -> usize {
    let count = source.remaining_count();
    out.reserve(count);
    while !source.is_exhausted() {
        match source.sample() {
            Ok(number) => out.push(number),
            Err(_) => break,
        }
    }
    count - source.remaining_count()
}
