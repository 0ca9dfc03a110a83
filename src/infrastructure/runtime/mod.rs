//! Runtime adapters for the controller's timer and event ports.

mod channel_sink;
mod timer;

pub use channel_sink::ChannelEventSink;
pub use timer::TokioTimerScheduler;
