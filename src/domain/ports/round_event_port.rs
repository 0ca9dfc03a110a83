//! Round event sink port definition.

use crate::domain::entities::{MatchState, RoundId};

/// Notifications the controller pushes to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new round began and its target is visible.
    Started {
        /// New round.
        round: RoundId,
        /// Number of digits in the target.
        digit_count: usize,
    },
    /// The reveal time elapsed.
    Hidden {
        /// Round whose target was hidden.
        round: RoundId,
    },
    /// The guess changed and was compared.
    Guessed {
        /// Round the guess belongs to.
        round: RoundId,
        /// Comparison result.
        state: MatchState,
    },
    /// The displayed result was cleared ahead of the next round.
    Cleared {
        /// Round being discarded.
        round: RoundId,
    },
}

/// Port receiving [`RoundEvent`]s.
pub trait RoundEventSink: Send + Sync {
    /// Delivers an event. Must not block.
    fn publish(&self, event: RoundEvent);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Collects published events.
    #[derive(Default, Clone)]
    pub struct RecordingSink {
        pub events: Arc<Mutex<Vec<RoundEvent>>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn take(&self) -> Vec<RoundEvent> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl RoundEventSink for RecordingSink {
        fn publish(&self, event: RoundEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
