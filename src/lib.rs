//! # drawbag - unique random number generation
//!
//! `drawbag` draws numbers one at a time, in random order and without
//! replacement, from either an explicit multiset of integers or an inclusive
//! numeric range. Every entry of the population is produced exactly once
//! before the sampler is exhausted; duplicates in the input are each produced
//! once, so uniqueness is by position, not by value.
//!
//! The pseudo-random source is a general-purpose PRNG (`rand`'s `StdRng` by
//! default). It is not suitable for security-sensitive sampling.
//!
//! ## Quick Start
//!
//! ```rust
//! use drawbag::UniqueNumberSampler;
//!
//! let mut sampler = UniqueNumberSampler::new([1, 2, 3, 4, 3, 6, 4, 8, 17, 42, 6]);
//! while sampler.remaining_count() > 0 {
//!     let number = sampler.sample().unwrap();
//!     println!("drew {number}");
//! }
//! assert!(sampler.sample().is_err());
//! ```
//!
//! Ranges are expanded at construction:
//!
//! ```rust
//! use drawbag::UniqueNumberSampler;
//!
//! let mut sampler = UniqueNumberSampler::from_range_seeded(3, 9, 42).unwrap();
//! assert_eq!(sampler.remaining_count(), 7);
//! let three = sampler.sample_many(3).unwrap();
//! assert!(three.iter().all(|n| (3..=9).contains(n)));
//!
//! assert!(UniqueNumberSampler::from_range(3, 2).unwrap_err().is_invalid_argument());
//! ```
//!
//! ## Injecting a random source
//!
//! Any `rand::Rng` can drive the sampler, which keeps tests reproducible:
//!
//! ```rust
//! use drawbag::{UniformIndexGenerator, UniqueNumberSampler};
//! use rand::rngs::mock::StepRng;
//!
//! let rng = UniformIndexGenerator::from_rng(StepRng::new(0, 0));
//! let mut sampler = UniqueNumberSampler::with_rng([7, 8, 9], rng);
//! assert_eq!(sampler.sample(), Ok(7));
//! ```
//!
//! ## Custom number sources
//!
//! Helpers such as [`Draws`](samplers::Draws) and [`core::drain_into`] work
//! over the [`NumberSource`](core::NumberSource) trait:
//!
//! ```rust
//! use drawbag::core::{drain_into, NumberSource};
//! use drawbag::error::{InvalidStateReason, Result};
//!
//! struct Countdown(Vec<i32>);
//!
//! impl NumberSource for Countdown {
//!     fn remaining_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn sample(&mut self) -> Result<i32> {
//!         self.0.pop().ok_or_else(|| InvalidStateReason::Exhausted.into())
//!     }
//! }
//!
//! let mut out = Vec::new();
//! drain_into(&mut Countdown(vec![1, 2]), &mut out);
//! assert_eq!(out, vec![2, 1]);
//! ```
//!
//! ## Threading
//!
//! Samplers hold no locks. Share one across threads only behind external
//! synchronization such as a `Mutex`.
//!
//! ## Modules
//!
//! - **[`api`](api)**: One-shot draw and shuffle functions
//! - **[`core`](core)**: The `NumberSource` trait and helpers
//! - **[`samplers`](samplers)**: `UniqueNumberSampler` and the `Draws` iterator
//! - **[`settings`](settings)**: Configuration for the high-level API
//! - **[`error`](error)**: `SamplerError` and its reasons
//! - **[`utils`](utils)**: The injectable uniform index generator

pub mod api;
pub mod core;
pub mod error;
pub mod samplers;
pub mod settings;
pub mod types;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

// Re-export high-level API
pub use api::{DrawResult, draw_from_numbers, draw_from_range, shuffle_numbers};

// Re-export core types for easy access
pub use crate::core::NumberSource;
pub use error::{InvalidArgumentReason, InvalidStateReason, SamplerError};
pub use samplers::{Draws, UniqueNumberSampler};
pub use settings::SamplerSettings;
pub use types::{Number, Population};
pub use utils::UniformIndexGenerator;
