//! Infrastructure layer with adapters for configuration, randomness and timers.

/// Application configuration.
pub mod config;
/// Random digit generation.
pub mod random;
/// Timer and event channel adapters.
pub mod runtime;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigOrigin, LogLevel, StorageManager};
pub use random::RandomDigits;
pub use runtime::{ChannelEventSink, TokioTimerScheduler};
