//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::DEFAULT_RESULT_DELAY;
use crate::domain::entities::RoundConfig;

const APP_NAME: &str = "fember";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "fember";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Seed for reproducible targets.
    #[serde(skip)]
    pub seed: Option<u64>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Starting round settings.
    #[serde(default)]
    pub game: GameConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial slider positions and round timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of digits to remember (2-10).
    #[serde(default = "default_digit_count")]
    pub digit_count: usize,

    /// Seconds the target stays visible (0.1-2.0, rounded to a tenth).
    #[serde(default = "default_reveal_seconds")]
    pub reveal_seconds: f64,

    /// Milliseconds a result stays before the next round starts.
    #[serde(default = "default_result_delay_ms")]
    pub result_delay_ms: u64,
}

impl GameConfig {
    /// Round settings, clamped into the allowed ranges.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig::from_sliders(self.digit_count as f64, self.reveal_seconds)
    }

    #[must_use]
    pub const fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            digit_count: default_digit_count(),
            reveal_seconds: default_reveal_seconds(),
            result_delay_ms: default_result_delay_ms(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Milliseconds the Correct/Incorrect label takes to fade.
    #[serde(default = "default_feedback_fade_ms")]
    pub feedback_fade_ms: u64,

    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl UiConfig {
    #[must_use]
    pub const fn feedback_fade(&self) -> Duration {
        Duration::from_millis(self.feedback_fade_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            feedback_fade_ms: default_feedback_fade_ms(),
            accent_color: default_accent_color(),
        }
    }
}

fn default_digit_count() -> usize {
    RoundConfig::default().digit_count()
}

fn default_reveal_seconds() -> f64 {
    RoundConfig::default().reveal().as_secs_f64()
}

#[allow(clippy::cast_possible_truncation)]
fn default_result_delay_ms() -> u64 {
    DEFAULT_RESULT_DELAY.as_millis() as u64
}

fn default_feedback_fade_ms() -> u64 {
    1000
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(digits) = args.digits {
            self.game.digit_count = digits;
        }
        if let Some(reveal_seconds) = args.reveal_seconds {
            self.game.reveal_seconds = reveal_seconds;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("fember.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            seed: None,
            log_level: LogLevel::Info,
            game: GameConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
