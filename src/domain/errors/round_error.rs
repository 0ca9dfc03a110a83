//! Round construction error types.

use thiserror::Error;

/// Errors raised when building a [`RoundConfig`](crate::domain::entities::RoundConfig)
/// from raw values.
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(missing_docs)]
pub enum RoundConfigError {
    #[error("digit count {value} is outside {min}..={max}")]
    DigitCountOutOfRange { value: usize, min: usize, max: usize },

    #[error("reveal time {value}s is outside {min}..={max} seconds")]
    RevealOutOfRange { value: f64, min: f64, max: f64 },

    #[error("reveal time must be a finite number of seconds")]
    NonFiniteReveal,
}

/// Errors raised when parsing a [`Target`](crate::domain::entities::Target).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum TargetError {
    #[error("target must contain at least one digit")]
    Empty,

    #[error("target contains non-digit character {found:?} at position {position}")]
    NonDigit { found: char, position: usize },
}
