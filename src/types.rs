//! Core shared types for the unique random number generator.
//!
//! `Number` is the value type handed out by every sampler in the crate. The
//! source system worked with 32-bit signed integers, so that is what we use.

/// Value type stored in, and drawn from, a sampler.
pub type Number = i32;

/// Describes the population a sampler was constructed from.
///
/// This is metadata only: sampling never consults it, but it lets callers
/// report progress (see [`crate::UniqueNumberSampler::drawn_count`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    /// An explicit multiset of `len` numbers (duplicates allowed).
    Numbers { len: usize },
    /// The consecutive integers `min..=max`.
    Range { min: Number, max: Number },
}

impl Population {
    /// Number of entries the population held at construction time.
    pub fn len(&self) -> usize {
        match *self {
            Population::Numbers { len } => len,
            // Widen before subtracting so `i32::MIN..=i32::MAX` cannot overflow.
            // Saturates where `usize` is narrower than the range length.
            Population::Range { min, max } => {
                usize::try_from(i64::from(max) - i64::from(min) + 1).unwrap_or(usize::MAX)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_len_is_inclusive() {
        assert_eq!(Population::Range { min: 3, max: 15 }.len(), 13);
        assert_eq!(Population::Range { min: 2, max: 2 }.len(), 1);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn range_len_spans_full_domain() {
        let full = Population::Range {
            min: Number::MIN,
            max: Number::MAX,
        };
        assert_eq!(full.len(), 1usize << 32);
    }

    #[test]
    fn empty_numbers_population() {
        assert!(Population::Numbers { len: 0 }.is_empty());
        assert!(!Population::Numbers { len: 4 }.is_empty());
    }
}
