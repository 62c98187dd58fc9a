//! PHEE library - guess-the-player terminal game
//!
//! A roster of players is read once from a hosted table. Each round draws a
//! random target; the player types names and gets per-attribute hints until
//! the target is found or eight guesses are spent.
//!
//! # Architecture
//!
//! - **Roster**: providers for the hosted data service and local JSON files
//! - **Game**: round controller owning the session and its one-second clock
//! - **TUI**: ratatui front end
//! - **Core**: pure rules live in the `phee_core` crate
//!
//! # Example
//!
//! ```no_run
//! use phee::{FileRoster, Game, load_roster};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let roster = load_roster(&FileRoster::new("players.json")).await;
//! let (tx, _rx) = mpsc::unbounded_channel();
//! let mut game = Game::new(tx);
//! game.load_roster(roster)?;
//! let outcome = game.submit_guess("jon smith");
//! println!("{:?}", outcome.message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod roster;
mod timer;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DATA_KEY_ENV, DATA_URL_ENV, PheeConfig};

// Crate-level exports - Game controller
pub use game::{Game, GameEvent};
pub use timer::{TICK_PERIOD, TickTimer};

// Crate-level exports - Roster providers
pub use roster::{
    DataServiceRoster, FileRoster, RosterError, RosterSource, load_roster, source_from_config,
};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, HISTORY_COLUMNS, LoadState, action_for, run_tui};

// Crate-level exports - Core game types
pub use phee_core::{
    AssetKind, Feedback, Guess, GuessOutcome, JerseyHint, MAX_GUESSES, Match, Phase, Player,
    PlayerId, Roster, Session, SessionError, Trend,
};
