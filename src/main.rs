use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fember::domain::ports::DigitSource;
use fember::infrastructure::{
    AppConfig, CliArgs, ConfigError, ConfigOrigin, RandomDigits, StorageManager,
};
use fember::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config(args: CliArgs) -> (AppConfig, Result<ConfigOrigin, ConfigError>) {
    let loaded = StorageManager::new()
        .and_then(|storage| storage.load_config(args.config.as_deref()));
    let (mut config, origin) = match loaded {
        Ok((config, origin)) => (config, Ok(origin)),
        Err(e) => (AppConfig::default(), Err(e)),
    };
    config.merge_with_args(args);
    (config, origin)
}

fn create_app() -> Result<App> {
    let (config, origin) = load_config(CliArgs::parse());

    init_logging(&config)?;

    info!(version = fember::VERSION, "Starting Fember");
    match origin {
        Ok(origin) => origin.log(),
        Err(e) => warn!(error = %e, "Failed to load config, using defaults"),
    }

    let digits: Box<dyn DigitSource> = match config.seed {
        Some(seed) => {
            warn!(seed, "Using a fixed seed; targets are reproducible");
            Box::new(RandomDigits::seeded(seed))
        }
        None => Box::new(RandomDigits::from_entropy()),
    };

    Ok(App::new(&config, digits))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
