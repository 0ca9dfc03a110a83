pub mod round_controller;

pub use round_controller::{DEFAULT_RESULT_DELAY, RoundController};
