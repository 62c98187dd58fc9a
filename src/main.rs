//! PHEE - guess-the-player terminal game
//!
//! Loads `.env`, reads the configuration and dispatches the subcommand.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use phee::{PheeConfig, RosterSource};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PheeConfig::load_or_default(&cli.config)?.with_env();

    match cli.command {
        Command::Play { roster_file } => run_play(apply_roster_file(config, roster_file)).await,
        Command::Roster { roster_file } => {
            run_roster(apply_roster_file(config, roster_file)).await
        }
    }
}

fn apply_roster_file(config: PheeConfig, roster_file: Option<PathBuf>) -> PheeConfig {
    match roster_file {
        Some(path) => config.with_roster_file(path),
        None => config,
    }
}

/// Run the terminal game
async fn run_play(config: PheeConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the TUI
    initialize_file_tracing(config.log_file())?;
    phee::run_tui(config).await
}

/// Print the roster as JSON lines
#[instrument(skip(config))]
async fn run_roster(config: PheeConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = phee::source_from_config(&config)?;
    let players = source.fetch_players().await?;
    info!(count = players.len(), "Roster fetched");

    for player in &players {
        println!("{}", serde_json::to_string(player)?);
    }
    Ok(())
}

fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,phee=debug,phee_core=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(path = %path.display(), "File tracing initialized");
    Ok(())
}
