//! Per-round settings chosen by the player.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::domain::errors::RoundConfigError;

/// Allowed number of digits in a target.
pub const DIGIT_COUNT_RANGE: RangeInclusive<usize> = 2..=10;
/// Allowed reveal time in seconds.
pub const REVEAL_SECONDS_RANGE: RangeInclusive<f64> = 0.1..=2.0;
/// Granularity of the reveal time.
pub const REVEAL_STEP_SECONDS: f64 = 0.1;

const REVEAL_STEPS_PER_SECOND: f64 = 10.0;

const DEFAULT_DIGIT_COUNT: usize = 6;
const DEFAULT_REVEAL_SECONDS: f64 = 0.5;

/// Digit count and reveal duration, read when a round starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundConfig {
    digit_count: usize,
    reveal: Duration,
}

impl RoundConfig {
    /// Builds a config, rejecting values outside the allowed ranges.
    ///
    /// # Errors
    /// Returns [`RoundConfigError`] if either value is out of range.
    pub fn new(digit_count: usize, reveal_seconds: f64) -> Result<Self, RoundConfigError> {
        if !DIGIT_COUNT_RANGE.contains(&digit_count) {
            return Err(RoundConfigError::DigitCountOutOfRange {
                value: digit_count,
                min: *DIGIT_COUNT_RANGE.start(),
                max: *DIGIT_COUNT_RANGE.end(),
            });
        }
        if !reveal_seconds.is_finite() {
            return Err(RoundConfigError::NonFiniteReveal);
        }
        if !REVEAL_SECONDS_RANGE.contains(&reveal_seconds) {
            return Err(RoundConfigError::RevealOutOfRange {
                value: reveal_seconds,
                min: *REVEAL_SECONDS_RANGE.start(),
                max: *REVEAL_SECONDS_RANGE.end(),
            });
        }

        Ok(Self {
            digit_count,
            reveal: Duration::from_secs_f64(reveal_seconds),
        })
    }

    /// Builds a config from slider positions, clamping into range.
    ///
    /// The digit count is rounded to the nearest whole digit and the reveal
    /// time to the nearest tenth of a second. Non-finite inputs fall back to
    /// the defaults.
    #[must_use]
    pub fn from_sliders(digits: f64, reveal_seconds: f64) -> Self {
        let default = Self::default();

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let digit_count = if digits.is_finite() {
            digits
                .round()
                .clamp(*DIGIT_COUNT_RANGE.start() as f64, *DIGIT_COUNT_RANGE.end() as f64)
                as usize
        } else {
            default.digit_count
        };

        let reveal = if reveal_seconds.is_finite() {
            let tenths = (reveal_seconds * REVEAL_STEPS_PER_SECOND).round();
            Duration::from_secs_f64(
                (tenths / REVEAL_STEPS_PER_SECOND)
                    .clamp(*REVEAL_SECONDS_RANGE.start(), *REVEAL_SECONDS_RANGE.end()),
            )
        } else {
            default.reveal
        };

        Self {
            digit_count,
            reveal,
        }
    }

    /// Number of digits in the target.
    #[must_use]
    pub const fn digit_count(&self) -> usize {
        self.digit_count
    }

    /// How long the target stays visible.
    #[must_use]
    pub const fn reveal(&self) -> Duration {
        self.reveal
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            digit_count: DEFAULT_DIGIT_COUNT,
            reveal: Duration::from_secs_f64(DEFAULT_REVEAL_SECONDS),
        }
    }
}
