//! Round entity: the target, the guess typed so far, and its visibility.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::TargetError;
use crate::domain::ports::DigitSource;

/// Generation counter identifying a round.
///
/// Timers carry the id of the round that scheduled them so a late timer can
/// be told apart from one belonging to the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoundId(pub u64);

impl RoundId {
    /// Returns the id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty string of decimal digits the player has to reproduce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Draws `digit_count` digits from `source`. Leading zeros are kept.
    ///
    /// A `digit_count` of zero yields a single digit so the target is never
    /// empty.
    pub fn generate(digit_count: usize, source: &mut dyn DigitSource) -> Self {
        let digits = (0..digit_count.max(1))
            .map(|_| char::from(b'0' + source.next_digit() % 10))
            .collect();
        Self(digits)
    }

    /// Returns the digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the target has no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TargetError::Empty);
        }
        if let Some((position, found)) = s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(TargetError::NonDigit { found, position });
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of comparing a guess against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Valid prefix, not yet complete.
    Pending,
    /// Guess equals the target.
    Match,
    /// Guess diverged from the target or contains a non-digit.
    Mismatch,
}

impl MatchState {
    /// Compares `partial` with `target`.
    #[must_use]
    pub fn evaluate(target: &Target, partial: &str) -> Self {
        if !partial.chars().all(|c| c.is_ascii_digit()) {
            return Self::Mismatch;
        }
        if partial == target.as_str() {
            Self::Match
        } else if target.as_str().starts_with(partial) {
            Self::Pending
        } else {
            Self::Mismatch
        }
    }

    /// Returns whether this state ends the round.
    #[must_use]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Match | Self::Mismatch)
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Match => write!(f, "match"),
            Self::Mismatch => write!(f, "mismatch"),
        }
    }
}

/// A single generate, reveal, guess cycle.
#[derive(Debug, Clone)]
pub struct Round {
    id: RoundId,
    target: Target,
    guess: String,
    revealed: bool,
}

impl Round {
    /// Creates a freshly revealed round with an empty guess.
    #[must_use]
    pub fn new(id: RoundId, target: Target) -> Self {
        Self {
            id,
            target,
            guess: String::new(),
            revealed: true,
        }
    }

    #[must_use]
    pub const fn id(&self) -> RoundId {
        self.id
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Stores `partial` as the current guess and compares it.
    pub fn submit(&mut self, partial: &str) -> MatchState {
        partial.clone_into(&mut self.guess);
        MatchState::evaluate(&self.target, partial)
    }

    /// Hides the target. Returns false if it was already hidden.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.revealed, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mock::ScriptedDigits;
    use test_case::test_case;

    fn target(s: &str) -> Target {
        s.parse().unwrap()
    }

    #[test_case("3920", "", MatchState::Pending ; "empty_guess")]
    #[test_case("3920", "39", MatchState::Pending ; "valid_prefix")]
    #[test_case("3920", "3920", MatchState::Match ; "exact")]
    #[test_case("5001", "51", MatchState::Mismatch ; "diverges_at_second_digit")]
    #[test_case("3920", "39201", MatchState::Mismatch ; "too_long")]
    #[test_case("3920", "3a", MatchState::Mismatch ; "non_digit")]
    #[test_case("0042", "00", MatchState::Pending ; "leading_zeros")]
    fn test_evaluate(target_str: &str, guess: &str, expected: MatchState) {
        assert_eq!(MatchState::evaluate(&target(target_str), guess), expected);
    }

    #[test]
    fn test_every_proper_prefix_is_pending() {
        let t = target("8675309");
        for end in 0..t.len() {
            assert_eq!(
                MatchState::evaluate(&t, &t.as_str()[..end]),
                MatchState::Pending
            );
        }
        assert_eq!(MatchState::evaluate(&t, t.as_str()), MatchState::Match);
    }

    #[test]
    fn test_non_digit_with_valid_prefix_is_mismatch() {
        assert_eq!(
            MatchState::evaluate(&target("1234"), "12 "),
            MatchState::Mismatch
        );
        assert_eq!(
            MatchState::evaluate(&target("1234"), "١٢"),
            MatchState::Mismatch
        );
    }

    #[test]
    fn test_target_parse_errors() {
        assert_eq!("".parse::<Target>(), Err(TargetError::Empty));
        assert_eq!(
            "12x4".parse::<Target>(),
            Err(TargetError::NonDigit {
                found: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn test_generate_uses_source_digits() {
        let mut source = ScriptedDigits::new(["0042"]);
        let t = Target::generate(4, &mut source);
        assert_eq!(t.as_str(), "0042");
    }

    #[test]
    fn test_generate_never_empty() {
        let mut source = ScriptedDigits::new(["7"]);
        assert_eq!(Target::generate(0, &mut source).len(), 1);
    }

    #[test]
    fn test_round_hide_reports_first_transition_only() {
        let mut round = Round::new(RoundId(1), target("12"));
        assert!(round.is_revealed());
        assert!(round.hide());
        assert!(!round.hide());
        assert!(!round.is_revealed());
    }

    #[test]
    fn test_round_submit_stores_guess() {
        let mut round = Round::new(RoundId(1), target("12"));
        assert_eq!(round.submit("1"), MatchState::Pending);
        assert_eq!(round.guess(), "1");
    }
}
