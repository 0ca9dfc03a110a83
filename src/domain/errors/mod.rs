//! Domain error types.

mod round_error;

pub use round_error::{RoundConfigError, TargetError};
