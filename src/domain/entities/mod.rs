//! Domain entity definitions.

mod round;
mod round_config;

pub use round::{MatchState, Round, RoundId, Target};
pub use round_config::{DIGIT_COUNT_RANGE, REVEAL_SECONDS_RANGE, REVEAL_STEP_SECONDS, RoundConfig};
