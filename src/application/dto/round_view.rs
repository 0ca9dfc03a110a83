//! Read-only round snapshot handed to the presentation layer.

use std::fmt;

use crate::domain::entities::{MatchState, RoundId};

/// Controller state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No round started yet.
    #[default]
    Idle,
    /// Target is visible.
    Revealed,
    /// Reveal time elapsed; target is hidden.
    Hidden,
    /// A final result is on screen and the next round is pending.
    Evaluating,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Revealed => write!(f, "revealed"),
            Self::Hidden => write!(f, "hidden"),
            Self::Evaluating => write!(f, "evaluating"),
        }
    }
}

/// What the screen needs to draw the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundView<'a> {
    /// Current round, if any.
    pub round: Option<RoundId>,
    /// Target digits, if a round is running.
    pub target: Option<&'a str>,
    /// Whether the target should be visible.
    pub revealed: bool,
    /// Guess typed so far.
    pub guess: &'a str,
    /// State machine phase.
    pub phase: Phase,
    /// Final result awaiting reset.
    pub result: Option<MatchState>,
}

impl RoundView<'_> {
    /// Target text to display, or `None` while hidden.
    #[must_use]
    pub fn visible_target(&self) -> Option<&str> {
        self.target.filter(|_| self.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_target_respects_reveal() {
        let mut view = RoundView {
            round: Some(RoundId(1)),
            target: Some("1234"),
            revealed: true,
            guess: "",
            phase: Phase::Revealed,
            result: None,
        };
        assert_eq!(view.visible_target(), Some("1234"));

        view.revealed = false;
        assert_eq!(view.visible_target(), None);
    }
}
