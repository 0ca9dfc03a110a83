use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fember",
    version,
    about = "Memorize a flashed number, then type it back",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Number of digits to remember (2-10).
    #[arg(short, long)]
    pub digits: Option<usize>,

    /// Seconds the number stays visible (0.1-2.0).
    #[arg(short, long)]
    pub reveal_seconds: Option<f64>,

    /// Seed for a reproducible sequence of numbers.
    #[arg(long, env = "FEMBER_SEED")]
    pub seed: Option<u64>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
