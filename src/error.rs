//! Error type shared by every sampler operation.
//!
//! There are exactly two kinds of failure. `InvalidArgument` is raised while
//! constructing a sampler from malformed input; `InvalidState` is raised when
//! a sampler is asked for more numbers than it still holds. Each carries a
//! structured reason so callers can tell the sub-cases apart without parsing
//! messages.

use thiserror::Error;

use crate::types::Number;

/// Why a constructor rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgumentReason {
    #[error("numbers is absent")]
    MissingNumbers,

    #[error("min_number {min} is greater than max_number {max}")]
    InvertedRange { min: Number, max: Number },
}

/// Why a sampling operation could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidStateReason {
    #[error("no remaining numbers to draw from")]
    Exhausted,

    #[error("requested {requested} numbers but only {remaining} remain")]
    InsufficientNumbers { requested: usize, remaining: usize },
}

/// Error returned by samplers and the high-level API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SamplerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentReason),

    #[error("invalid state: {0}")]
    InvalidState(#[from] InvalidStateReason),
}

impl SamplerError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SamplerError::InvalidArgument(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, SamplerError::InvalidState(_))
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SamplerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_reason() {
        let err = SamplerError::from(InvalidArgumentReason::InvertedRange { min: 3, max: 2 });
        assert_eq!(
            err.to_string(),
            "invalid argument: min_number 3 is greater than max_number 2"
        );

        let err = SamplerError::from(InvalidStateReason::Exhausted);
        assert_eq!(
            err.to_string(),
            "invalid state: no remaining numbers to draw from"
        );
    }

    #[test]
    fn kind_predicates() {
        let arg = SamplerError::InvalidArgument(InvalidArgumentReason::MissingNumbers);
        assert!(arg.is_invalid_argument());
        assert!(!arg.is_invalid_state());

        let state = SamplerError::InvalidState(InvalidStateReason::InsufficientNumbers {
            requested: 4,
            remaining: 1,
        });
        assert!(state.is_invalid_state());
        assert!(!state.is_invalid_argument());
    }
}
