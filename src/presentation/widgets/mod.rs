mod feedback_label;
mod footer_bar;
mod header_bar;
mod input;
mod slider;
mod target_display;

pub use feedback_label::FeedbackLabel;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use slider::Slider;
pub use target_display::TargetDisplay;
