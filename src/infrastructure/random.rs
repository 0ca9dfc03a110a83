//! Random digit source backed by ChaCha.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::ports::DigitSource;

/// Uniform digit generator.
pub struct RandomDigits {
    rng: ChaCha8Rng,
}

impl RandomDigits {
    /// Seeds from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeds deterministically, so the same seed replays the same targets.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDigits {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl DigitSource for RandomDigits {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..10)
    }
}
