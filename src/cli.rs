//! Command-line interface for phee.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PHEE - guess the player from attribute hints
#[derive(Parser, Debug)]
#[command(name = "phee")]
#[command(about = "Guess-the-player terminal game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "phee.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play {
        /// Read players from a JSON file instead of the data service
        #[arg(long)]
        roster_file: Option<PathBuf>,
    },

    /// Fetch the roster once and print each player as a JSON line
    Roster {
        /// Read players from a JSON file instead of the data service
        #[arg(long)]
        roster_file: Option<PathBuf>,
    },
}
