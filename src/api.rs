//! High-level Rust API.
//!
//! One-shot helpers for the common cases: draw a handful of numbers from a
//! multiset or a range, or shuffle a whole multiset. They build a
//! [`UniqueNumberSampler`] from [`SamplerSettings`] and return what was drawn
//! along with what was left.

use crate::core::drain_into;
use crate::error::Result;
use crate::samplers::UniqueNumberSampler;
use crate::settings::SamplerSettings;
use crate::types::Number;

/// Result of a one-shot draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    /// Numbers drawn, in draw order.
    pub drawn: Vec<Number>,
    /// Numbers left undrawn, in the sampler's internal order.
    pub remaining: Vec<Number>,
}

/// Draw `count` numbers without replacement from an explicit multiset.
///
/// # Arguments
/// * `numbers` - Population to draw from; duplicates are drawn once each
/// * `count` - How many numbers to draw
/// * `settings_opt` - Optional settings (uses defaults if None)
///
/// # Errors
/// `InvalidState` if `count` exceeds the population size.
pub fn draw_from_numbers<I>(
    numbers: I,
    count: usize,
    settings_opt: Option<SamplerSettings>,
) -> Result<DrawResult>
where
    I: IntoIterator<Item = Number>,
{
    let settings = settings_opt.unwrap_or_default();
    let sampler = UniqueNumberSampler::from_numbers_with_settings(numbers, &settings);
    draw(sampler, count)
}

/// Draw `count` numbers without replacement from `min_number..=max_number`.
///
/// # Errors
/// `InvalidArgument` if `min_number > max_number`; `InvalidState` if `count`
/// exceeds the range length.
pub fn draw_from_range(
    min_number: Number,
    max_number: Number,
    count: usize,
    settings_opt: Option<SamplerSettings>,
) -> Result<DrawResult> {
    let settings = settings_opt.unwrap_or_default();
    let sampler = UniqueNumberSampler::from_range_with_settings(min_number, max_number, &settings)?;
    draw(sampler, count)
}

/// Return every number of the multiset in uniformly random order.
pub fn shuffle_numbers<I>(numbers: I, settings_opt: Option<SamplerSettings>) -> Vec<Number>
where
    I: IntoIterator<Item = Number>,
{
    let settings = settings_opt.unwrap_or_default();
    let mut sampler = UniqueNumberSampler::from_numbers_with_settings(numbers, &settings);
    let mut out = Vec::new();
    drain_into(&mut sampler, &mut out);
    out
}

fn draw(mut sampler: UniqueNumberSampler, count: usize) -> Result<DrawResult> {
    let drawn = sampler.sample_many(count)?;
    Ok(DrawResult {
        drawn,
        remaining: sampler.remaining_numbers(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidArgumentReason, InvalidStateReason, SamplerError};

    #[test]
    fn range_draw_partitions_range() {
        let result = draw_from_range(3, 15, 3, Some(SamplerSettings::seeded(9))).unwrap();
        assert_eq!(result.drawn.len(), 3);
        assert_eq!(result.remaining.len(), 10);

        let mut all: Vec<Number> = result.drawn.iter().chain(&result.remaining).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (3..=15).collect::<Vec<_>>());
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            draw_from_range(3, 2, 1, None),
            Err(SamplerError::InvalidArgument(
                InvalidArgumentReason::InvertedRange { min: 3, max: 2 }
            ))
        );
    }

    #[test]
    fn too_many_requested() {
        assert_eq!(
            draw_from_numbers([1, 2], 3, None),
            Err(SamplerError::InvalidState(
                InvalidStateReason::InsufficientNumbers {
                    requested: 3,
                    remaining: 2,
                }
            ))
        );
    }

    #[test]
    fn seeded_draws_repeat() {
        let settings = Some(SamplerSettings::seeded(77));
        let a = draw_from_numbers(0..50, 10, settings).unwrap();
        let b = draw_from_numbers(0..50, 10, settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let input = vec![1, 2, 3, 4, 3, 6, 4, 8, 17, 42, 6];
        let mut shuffled = shuffle_numbers(input.clone(), Some(SamplerSettings::seeded(5)));
        assert_eq!(shuffled.len(), input.len());

        let mut expected = input;
        expected.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(shuffled, expected);
    }
}
