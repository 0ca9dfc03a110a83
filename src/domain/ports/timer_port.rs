//! Timer scheduling port definition.

use std::time::Duration;

use crate::domain::entities::RoundId;

/// What a fired timer asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Hide the target after the reveal time.
    Hide,
    /// Clear the result and start the next round.
    Reset,
}

/// A timer that fired, tagged with the round that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// Round that scheduled the timer.
    pub round: RoundId,
    /// Action requested.
    pub kind: TimerKind,
}

impl TimerEvent {
    /// Creates a hide timer event.
    #[must_use]
    pub const fn hide(round: RoundId) -> Self {
        Self {
            round,
            kind: TimerKind::Hide,
        }
    }

    /// Creates a reset timer event.
    #[must_use]
    pub const fn reset(round: RoundId) -> Self {
        Self {
            round,
            kind: TimerKind::Reset,
        }
    }
}

/// Port for one-shot timers.
///
/// Implementations deliver `event` back to the controller's owner once
/// `delay` has passed. Delivery happens on the owner's side, never by
/// calling into the controller directly.
pub trait TimerScheduler: Send + Sync {
    /// Schedules `event` to fire after `delay`.
    fn schedule(&self, delay: Duration, event: TimerEvent);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records scheduled timers so tests can fire them by hand.
    #[derive(Default, Clone)]
    pub struct RecordingScheduler {
        pub scheduled: Arc<Mutex<Vec<(Duration, TimerEvent)>>>,
    }

    impl RecordingScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Removes and returns everything scheduled so far.
        pub fn drain(&self) -> Vec<(Duration, TimerEvent)> {
            std::mem::take(&mut *self.scheduled.lock().unwrap())
        }
    }

    impl TimerScheduler for RecordingScheduler {
        fn schedule(&self, delay: Duration, event: TimerEvent) {
            self.scheduled.lock().unwrap().push((delay, event));
        }
    }
}
