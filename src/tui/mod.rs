//! Terminal UI for the guessing game

mod app;
mod input;
mod ui;

pub use app::{App, HISTORY_COLUMNS, LoadState};
pub use input::{Action, action_for};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::PheeConfig;
use crate::game::{Game, GameEvent};
use crate::roster::{load_roster, source_from_config};

/// Runs the game until the player quits.
///
/// The roster fetch runs in the background; the screen is interactive
/// while it is in flight.
#[instrument(skip(config))]
pub async fn run_tui(config: PheeConfig) -> Result<()> {
    info!("Starting PHEE TUI");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_roster_fetch(&config, event_tx.clone());

    let game = Game::new(event_tx);
    let mut app = App::new(game, config.images_dir().clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game_loop(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn spawn_roster_fetch(config: &PheeConfig, events: mpsc::UnboundedSender<GameEvent>) {
    let source = source_from_config(config);
    tokio::spawn(async move {
        let roster = match source {
            Ok(source) => load_roster(source.as_ref()).await,
            Err(e) => {
                error!(error = %e, "Error fetching player data");
                Default::default()
            }
        };
        if events.send(GameEvent::RosterLoaded(roster)).is_err() {
            debug!("Game loop gone before roster arrived");
        }
    });
}

/// Draw, drain game events, read one key; repeat.
async fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        // Short poll keeps the clock display moving.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.apply(action_for(key, app.round_over()));
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        tokio::task::yield_now().await;
    }
}
