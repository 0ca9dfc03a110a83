//! Digit source port definition.

/// Port supplying the random digits a target is built from.
pub trait DigitSource: Send {
    /// Returns a digit in `0..=9`.
    fn next_digit(&mut self) -> u8;
}
