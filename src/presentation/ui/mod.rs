//! UI screens.

mod app;
mod game_screen;

pub use app::App;
pub use game_screen::{GameKeyResult, GameScreen, GameScreenState, SettingFocus};
