//! Data transfer objects for the application layer.

mod round_view;

pub use round_view::{Phase, RoundView};
