//! Sampling strategies.
//!
//! Currently a single strategy: uniform draws without replacement from a
//! fixed multiset ([`UniqueNumberSampler`]), plus the [`Draws`] iterator that
//! works over any [`NumberSource`](crate::core::NumberSource).

pub mod draws;
pub mod unique;

pub use draws::Draws;
pub use unique::UniqueNumberSampler;
