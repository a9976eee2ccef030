//! Unique random number generator drawing numbers without replacement.
//!
//! "Unique" is with respect to a number's *position* in the population, not
//! its value. Given `{1, 2, 3, 4, 3, 6, 4, 8, 17, 42, 6}`, once the first `3`
//! is drawn only the second `3` can still be produced; eleven draws might
//! yield `42 6 3 4 2 4 6 17 3 8 1`.

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::core::NumberSource;
use crate::error::{InvalidArgumentReason, InvalidStateReason, Result, SamplerError};
use crate::samplers::Draws;
use crate::settings::SamplerSettings;
use crate::types::{Number, Population};
use crate::utils::UniformIndexGenerator;

/// Draws numbers one at a time, uniformly at random, from a fixed multiset
/// until every entry has been produced exactly once.
///
/// The sampler is a single-owner value with no internal locking. To share one
/// instance between threads, wrap it in a `Mutex` (or confine it to a single
/// task) and serialize access yourself.
#[derive(Debug, Clone)]
pub struct UniqueNumberSampler<R = StdRng> {
    remaining: Vec<Number>,
    population: Population,
    rng: UniformIndexGenerator<R>,
}

impl UniqueNumberSampler<StdRng> {
    /// Sampler over an explicit multiset of numbers (duplicates allowed, may
    /// be empty), seeded from entropy.
    pub fn new<I>(numbers: I) -> Self
    where
        I: IntoIterator<Item = Number>,
    {
        Self::with_rng(numbers, UniformIndexGenerator::new())
    }

    /// Like [`new`](Self::new) but with a fixed seed.
    pub fn seeded<I>(numbers: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = Number>,
    {
        Self::with_rng(numbers, UniformIndexGenerator::from_seed(seed))
    }

    /// Sampler over a multiset that may be absent.
    ///
    /// `None` is rejected with [`InvalidArgumentReason::MissingNumbers`]; an
    /// empty-but-present sequence is accepted.
    pub fn from_optional_numbers<I>(numbers: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Number>,
    {
        numbers
            .map(Self::new)
            .ok_or(SamplerError::InvalidArgument(
                InvalidArgumentReason::MissingNumbers,
            ))
    }

    /// Sampler over the consecutive integers `min_number..=max_number`,
    /// seeded from entropy.
    ///
    /// Fails with [`InvalidArgumentReason::InvertedRange`] when
    /// `min_number > max_number`.
    pub fn from_range(min_number: Number, max_number: Number) -> Result<Self> {
        Self::from_range_with_rng(min_number, max_number, UniformIndexGenerator::new())
    }

    /// Like [`from_range`](Self::from_range) but with a fixed seed.
    pub fn from_range_seeded(min_number: Number, max_number: Number, seed: u64) -> Result<Self> {
        Self::from_range_with_rng(min_number, max_number, UniformIndexGenerator::from_seed(seed))
    }

    pub(crate) fn from_numbers_with_settings<I>(numbers: I, settings: &SamplerSettings) -> Self
    where
        I: IntoIterator<Item = Number>,
    {
        let remaining: Vec<Number> = numbers.into_iter().collect();
        let population = Population::Numbers {
            len: remaining.len(),
        };
        Self::build(
            remaining,
            population,
            UniformIndexGenerator::from_settings(settings),
            settings.trace_population,
        )
    }

    pub(crate) fn from_range_with_settings(
        min_number: Number,
        max_number: Number,
        settings: &SamplerSettings,
    ) -> Result<Self> {
        check_range(min_number, max_number)?;
        Ok(Self::build(
            (min_number..=max_number).collect(),
            Population::Range {
                min: min_number,
                max: max_number,
            },
            UniformIndexGenerator::from_settings(settings),
            settings.trace_population,
        ))
    }
}

impl<R: Rng> UniqueNumberSampler<R> {
    /// Sampler over an explicit multiset using the given random source.
    pub fn with_rng<I>(numbers: I, rng: UniformIndexGenerator<R>) -> Self
    where
        I: IntoIterator<Item = Number>,
    {
        let remaining: Vec<Number> = numbers.into_iter().collect();
        let population = Population::Numbers {
            len: remaining.len(),
        };
        Self::build(remaining, population, rng, true)
    }

    /// Sampler over `min_number..=max_number` using the given random source.
    pub fn from_range_with_rng(
        min_number: Number,
        max_number: Number,
        rng: UniformIndexGenerator<R>,
    ) -> Result<Self> {
        check_range(min_number, max_number)?;
        Ok(Self::build(
            (min_number..=max_number).collect(),
            Population::Range {
                min: min_number,
                max: max_number,
            },
            rng,
            true,
        ))
    }

    fn build(
        remaining: Vec<Number>,
        population: Population,
        rng: UniformIndexGenerator<R>,
        trace_population: bool,
    ) -> Self {
        debug!("unique sampler created over {:?}", population);
        if trace_population && log::log_enabled!(log::Level::Trace) {
            trace!("unique sampler population: {:?}", remaining);
        }
        Self {
            remaining,
            population,
            rng,
        }
    }

    /// Count of numbers still available.
    ///
    /// Check this is non-zero before calling [`sample`](Self::sample).
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Owned snapshot of the numbers still available, in internal order.
    pub fn remaining_numbers(&self) -> Vec<Number> {
        self.remaining.clone()
    }

    /// Read-only view of the numbers still available, in internal order.
    pub fn remaining_slice(&self) -> &[Number] {
        &self.remaining
    }

    /// The population this sampler was built from.
    pub fn population(&self) -> Population {
        self.population
    }

    /// How many numbers have been drawn so far.
    pub fn drawn_count(&self) -> usize {
        self.population.len() - self.remaining.len()
    }

    /// Draw one number uniformly at random from the remaining positions and
    /// remove it.
    pub fn sample(&mut self) -> Result<Number> {
        let Some(index) = self.rng.next_index(self.remaining.len()) else {
            warn!("sample called on an exhausted unique sampler");
            return Err(InvalidStateReason::Exhausted.into());
        };
        // Order is irrelevant, so O(1) removal is fine.
        let number = self.remaining.swap_remove(index);
        trace!(
            "drew {} from slot {} ({} remaining)",
            number,
            index,
            self.remaining.len()
        );
        Ok(number)
    }

    /// Draw `count` numbers, or none at all if fewer than `count` remain.
    pub fn sample_many(&mut self, count: usize) -> Result<Vec<Number>> {
        let remaining = self.remaining.len();
        if count > remaining {
            warn!(
                "requested {} numbers from a unique sampler holding {}",
                count, remaining
            );
            return Err(InvalidStateReason::InsufficientNumbers {
                requested: count,
                remaining,
            }
            .into());
        }
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.sample()?);
        }
        Ok(out)
    }

    /// Iterator that keeps drawing until the sampler is exhausted.
    pub fn draws(&mut self) -> Draws<'_, Self> {
        Draws::new(self)
    }
}

impl<R: Rng> NumberSource for UniqueNumberSampler<R> {
    fn remaining_count(&self) -> usize {
        UniqueNumberSampler::remaining_count(self)
    }

    fn sample(&mut self) -> Result<Number> {
        UniqueNumberSampler::sample(self)
    }
}

fn check_range(min_number: Number, max_number: Number) -> Result<()> {
    if min_number > max_number {
        return Err(InvalidArgumentReason::InvertedRange {
            min: min_number,
            max: max_number,
        }
        .into());
    }
    Ok(())
}
