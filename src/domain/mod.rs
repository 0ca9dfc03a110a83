//! Domain layer with the round model, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{MatchState, Round, RoundConfig, RoundId, Target};
pub use errors::{RoundConfigError, TargetError};
pub use ports::{DigitSource, RoundEvent, RoundEventSink, TimerEvent, TimerKind, TimerScheduler};
