//! Application layer with the round controller and its DTOs.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;

pub use dto::{Phase, RoundView};
pub use services::{DEFAULT_RESULT_DELAY, RoundController};
