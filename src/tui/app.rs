//! Application state and logic.

use phee_core::{AssetKind, Guess, SessionError, asset_path, format_elapsed};
use tracing::{debug, info, instrument, warn};

use super::input::Action;
use crate::game::{Game, GameEvent};

/// Column titles of the guess history table.
pub const HISTORY_COLUMNS: [&str; 7] = ["Name", "Team", "Pos", "Conf", "Ht", "Age", "#"];

/// Roster loading progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch still in flight.
    Loading,
    /// Roster installed and a round is running.
    Ready,
    /// Fetch failed or returned no players.
    Unavailable,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    input: String,
    message: String,
    images_dir: String,
    load_state: LoadState,
    should_quit: bool,
}

impl App {
    /// Creates the app around a game controller.
    pub fn new(game: Game, images_dir: impl Into<String>) -> Self {
        Self {
            game,
            input: String::new(),
            message: String::new(),
            images_dir: images_dir.into(),
            load_state: LoadState::Loading,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current contents of the name field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last message shown to the player.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Roster loading progress.
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True when the round no longer accepts guesses.
    pub fn round_over(&self) -> bool {
        self.game.session().is_terminal()
    }

    /// Guesses left for display.
    pub fn guesses_left(&self) -> u8 {
        *self.game.session().guesses_left()
    }

    /// Elapsed time as `HH:MM:SS`.
    pub fn clock(&self) -> String {
        format_elapsed(*self.game.session().elapsed())
    }

    /// Path of the image the page would currently show.
    pub fn image(&self) -> Option<(AssetKind, String)> {
        let session = self.game.session();
        let kind = session.visible_image()?;
        let target = session.target().as_ref()?;
        Some((kind, asset_path(&self.images_dir, target.name(), kind)))
    }

    /// Guess history as table rows, oldest first.
    pub fn history_rows(&self) -> Vec<[String; 7]> {
        self.game.session().history().iter().map(history_row).collect()
    }

    /// Handles an event from the game loop.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: GameEvent) {
        let roster_event = matches!(event, GameEvent::RosterLoaded(_));
        match self.game.handle_event(event) {
            Ok(()) if roster_event => {
                info!(players = self.game.roster().len(), "Game ready");
                self.load_state = LoadState::Ready;
            }
            Ok(()) => {}
            Err(SessionError::EmptyRoster) => {
                warn!("No players loaded, game cannot start");
                self.load_state = LoadState::Unavailable;
            }
        }
    }

    /// Applies a key action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        debug!(?action, "Applying action");
        match action {
            Action::Insert(c) => self.input.push(c),
            Action::Backspace => {
                self.input.pop();
            }
            Action::Submit => self.submit(),
            Action::ToggleSilhouette => {
                self.game.toggle_silhouette();
            }
            Action::PlayAgain => self.play_again(),
            Action::Quit => self.should_quit = true,
            Action::Nothing => {}
        }
    }

    fn submit(&mut self) {
        let outcome = self.game.submit_guess(&self.input);
        if let Some(message) = outcome.message() {
            self.message = message;
            self.input.clear();
        }
    }

    fn play_again(&mut self) {
        match self.game.play_again() {
            Ok(()) => {
                self.message.clear();
                self.input.clear();
            }
            Err(e) => warn!(error = %e, "Cannot start a new round"),
        }
    }
}

fn history_row(guess: &Guess) -> [String; 7] {
    let feedback = guess.feedback();
    [
        guess.name().clone(),
        feedback.team_text(),
        feedback.position_text(),
        feedback.conference_text(),
        feedback.height_text(),
        feedback.age_text(),
        feedback.number_text(),
    ]
}
