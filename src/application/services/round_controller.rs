//! Round controller: generates targets, times the reveal, scores guesses.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::dto::{Phase, RoundView};
use crate::domain::entities::{MatchState, Round, RoundConfig, RoundId, Target};
use crate::domain::ports::{
    DigitSource, RoundEvent, RoundEventSink, TimerEvent, TimerKind, TimerScheduler,
};

/// Delay between a final result and the next round.
pub const DEFAULT_RESULT_DELAY: Duration = Duration::from_millis(10);

/// Owns the current round and drives it through
/// `Idle -> Revealed -> Hidden -> Evaluating -> Revealed`.
///
/// The controller never calls back into its consumer. Timers it schedules
/// come back through [`RoundController::handle_timer`] and are dropped when
/// their round is no longer current.
pub struct RoundController {
    config: RoundConfig,
    result_delay: Duration,
    digits: Box<dyn DigitSource>,
    timers: Arc<dyn TimerScheduler>,
    sink: Arc<dyn RoundEventSink>,
    last_id: RoundId,
    round: Option<Round>,
    phase: Phase,
    result: Option<MatchState>,
}

impl RoundController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(
        config: RoundConfig,
        digits: Box<dyn DigitSource>,
        timers: Arc<dyn TimerScheduler>,
        sink: Arc<dyn RoundEventSink>,
    ) -> Self {
        Self {
            config,
            result_delay: DEFAULT_RESULT_DELAY,
            digits,
            timers,
            sink,
            last_id: RoundId::default(),
            round: None,
            phase: Phase::Idle,
            result: None,
        }
    }

    /// Overrides the pause between a result and the next round.
    #[must_use]
    pub const fn with_result_delay(mut self, delay: Duration) -> Self {
        self.result_delay = delay;
        self
    }

    /// Configuration the next round will use.
    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    /// Replaces the configuration for subsequent rounds.
    pub fn set_config(&mut self, config: RoundConfig) {
        if config != self.config {
            debug!(
                digits = config.digit_count(),
                reveal_ms = config.reveal().as_millis(),
                "Round config updated"
            );
        }
        self.config = config;
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            round: self.round.as_ref().map(Round::id),
            target: self.round.as_ref().map(|r| r.target().as_str()),
            revealed: self.round.as_ref().is_some_and(Round::is_revealed),
            guess: self.round.as_ref().map_or("", Round::guess),
            phase: self.phase,
            result: self.result,
        }
    }

    /// Starts a new round with `config`, superseding any running one.
    pub fn start_new_round(&mut self, config: RoundConfig) {
        self.config = config;

        let id = self.last_id.next();
        self.last_id = id;

        let target = Target::generate(config.digit_count(), self.digits.as_mut());
        self.round = Some(Round::new(id, target));
        self.phase = Phase::Revealed;
        self.result = None;

        self.timers.schedule(config.reveal(), TimerEvent::hide(id));
        self.sink.publish(RoundEvent::Started {
            round: id,
            digit_count: config.digit_count(),
        });

        info!(
            round = %id,
            digits = config.digit_count(),
            reveal_ms = config.reveal().as_millis(),
            "Generated new target"
        );
    }

    /// Records `partial` as the guess and compares it with the target.
    ///
    /// A `Match` or `Mismatch` moves the round to `Evaluating` and schedules
    /// the automatic reset. While evaluating, further input is ignored and the
    /// latched result is returned.
    pub fn submit_guess(&mut self, partial: &str) -> MatchState {
        if let (Phase::Evaluating, Some(result)) = (self.phase, self.result) {
            debug!(guess = partial, "Ignoring input while result is shown");
            return result;
        }

        let Some(round) = self.round.as_mut() else {
            warn!("Guess submitted before any round started");
            return MatchState::Pending;
        };

        let state = round.submit(partial);
        let id = round.id();
        debug!(round = %id, current = partial, %state, "Guess compared");

        if state.is_final() {
            self.phase = Phase::Evaluating;
            self.result = Some(state);
            self.timers
                .schedule(self.result_delay, TimerEvent::reset(id));
        }

        self.sink.publish(RoundEvent::Guessed { round: id, state });
        state
    }

    /// Applies a fired timer. Returns false when the timer is stale or had
    /// nothing left to do.
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        let current = self.round.as_ref().map(Round::id);
        if current != Some(event.round) {
            debug!(
                timer_round = %event.round,
                kind = ?event.kind,
                "Ignoring timer from a previous round"
            );
            return false;
        }

        match event.kind {
            TimerKind::Hide => self.hide_target(event.round),
            TimerKind::Reset => self.reset(event.round),
        }
    }

    fn hide_target(&mut self, id: RoundId) -> bool {
        let Some(round) = self.round.as_mut() else {
            return false;
        };
        if !round.hide() {
            return false;
        }

        if self.phase == Phase::Revealed {
            self.phase = Phase::Hidden;
        }
        self.sink.publish(RoundEvent::Hidden { round: id });
        debug!(round = %id, "Target hidden");
        true
    }

    fn reset(&mut self, id: RoundId) -> bool {
        if self.phase != Phase::Evaluating {
            return false;
        }

        self.result = None;
        self.sink.publish(RoundEvent::Cleared { round: id });
        self.start_new_round(self.config);
        true
    }
}
