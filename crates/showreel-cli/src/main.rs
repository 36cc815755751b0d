use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showreel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "showreel")]
#[command(author, version, about = "A scroll-driven intro and carousel landing page for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read configuration from this file instead of ~/.config/showreel/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Replay wheel input against a headless page and print the intro per frame
    Simulate {
        /// Wheel delta per event, in pixels (negative scrolls up)
        #[arg(short = 'd', long, default_value_t = 100.0, allow_hyphen_values = true)]
        delta: f64,
        /// Number of wheel events to send
        #[arg(short = 'e', long, default_value_t = 10)]
        events: u32,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration if no file exists yet
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let config = Arc::new(config);

    init_logging(&config)?;
    tracing::info!(config = %AppConfig::config_path().display(), "Starting showreel");

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init => commands::config::init(),
        },
        Some(Commands::Simulate { delta, events }) => {
            commands::simulate::run(config, delta, events)
        }
    }
}

/// Log to a file under the data directory; the terminal belongs to the TUI
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
