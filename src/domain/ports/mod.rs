mod digit_source_port;
mod round_event_port;
mod timer_port;

pub use digit_source_port::DigitSource;
pub use round_event_port::{RoundEvent, RoundEventSink};
pub use timer_port::{TimerEvent, TimerKind, TimerScheduler};

#[cfg(test)]
pub mod mock {
    pub use super::digit_source_port::mock::ScriptedDigits;
    pub use super::round_event_port::mock::RecordingSink;
    pub use super::timer_port::mock::RecordingScheduler;
}
