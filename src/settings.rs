//! Configuration types for the high-level drawing API.
//!
//! Samplers themselves take no configuration beyond their population and
//! random source. These settings are consumed by the functions in
//! [`crate::api`] and by the Python bindings.

/// Settings controlling how a sampler is built by the high-level API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerSettings {
    /// Fixed seed for the pseudo-random source. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Emit a `trace`-level log record listing the population on construction.
    pub trace_population: bool,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            seed: None,
            trace_population: true,
        }
    }
}

impl SamplerSettings {
    /// Settings with a fixed seed (useful for tests and reproducible draws).
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
