//! Miscellaneous utilities shared across the crate.
//!
//! The main item is a small wrapper around `rand` that draws uniform indices
//! for the samplers. It owns the pseudo-random source so the source can be
//! injected (seeded, mocked) instead of living in a global.

use rand::distributions::Uniform;
use rand::prelude::*;

use crate::settings::SamplerSettings;

/// Uniform index generator over `[0, n)`.
///
/// By default this uses an entropy-seeded `StdRng`, but test code can
/// construct it from a fixed seed, or wrap any other `Rng`, for reproducible
/// behavior. Not suitable for security-sensitive sampling.
#[derive(Debug, Clone)]
pub struct UniformIndexGenerator<R = StdRng> {
    rng: R,
}

impl UniformIndexGenerator<StdRng> {
    /// Construct with a random seed (suitable for production use).
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Construct with a fixed seed (useful for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Construct according to the seed policy in `settings`.
    pub fn from_settings(settings: &SamplerSettings) -> Self {
        match settings.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for UniformIndexGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UniformIndexGenerator<R> {
    /// Wrap an existing random source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw an index uniformly from `[0, len)`.
    ///
    /// Returns `None` when `len == 0`, since the range is empty.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.sample(Uniform::new(0, len)))
    }
}
