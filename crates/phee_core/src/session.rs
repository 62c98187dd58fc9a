//! Round state machine: target, remaining guesses, elapsed time, history.
//!
//! The session only records time; whoever owns the session drives
//! [`Session::tick`] and stops ticking once [`GuessOutcome::is_terminal`]
//! reports the round is over.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::assets::AssetKind;
use crate::feedback::Feedback;
use crate::name::normalize_name;
use crate::player::Player;
use crate::roster::Roster;

/// Guesses granted at the start of every round.
pub const MAX_GUESSES: u8 = 8;

/// Lifecycle phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum Phase {
    /// No target selected yet.
    #[default]
    Idle,
    /// Target selected, guesses accepted, clock running.
    Active,
    /// Target guessed.
    Won,
    /// Guesses exhausted.
    Lost,
}

impl Phase {
    /// True for [`Phase::Won`] and [`Phase::Lost`].
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One evaluated submission.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Guess {
    /// Normalized guessed name.
    name: String,
    /// Comparison against the target.
    feedback: Feedback,
}

/// Result of [`Session::submit_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No target, or the round no longer accepts guesses.
    Ignored,
    /// Name is not on the roster. No guess consumed.
    NotFound,
    /// Wrong player; the round continues.
    Incorrect {
        /// Guesses still available.
        remaining: u8,
    },
    /// Target found.
    Correct {
        /// Target's name.
        answer: String,
    },
    /// Last guess spent without finding the target.
    GameOver {
        /// Target's name.
        answer: String,
    },
}

impl GuessOutcome {
    /// True when this outcome ended the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Correct { .. } | Self::GameOver { .. })
    }

    /// User-facing message, `None` for ignored submissions.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Ignored => None,
            Self::NotFound => {
                Some("❌ Player not found! Make sure you're guessing the correct name.".to_string())
            }
            Self::Incorrect { .. } => Some("❌ Incorrect! Try again.".to_string()),
            Self::Correct { answer } => Some(format!("🎉 Correct! The player was {}!", answer)),
            Self::GameOver { answer } => {
                Some(format!("Game Over! The correct player was {}.", answer))
            }
        }
    }
}

/// Session errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A target cannot be drawn from an empty roster.
    #[display("Cannot pick a target from an empty roster")]
    EmptyRoster,
}

/// State of the current round.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Player to be guessed.
    target: Option<Player>,
    /// Guesses still available.
    guesses_left: u8,
    /// Seconds counted while the round was active.
    elapsed: u64,
    /// Evaluated guesses, oldest first.
    history: Vec<Guess>,
    /// Current phase.
    phase: Phase,
    /// Whether the silhouette image is revealed.
    show_silhouette: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an idle session with no target.
    pub fn new() -> Self {
        Self {
            target: None,
            guesses_left: MAX_GUESSES,
            elapsed: 0,
            history: Vec::new(),
            phase: Phase::Idle,
            show_silhouette: false,
        }
    }

    /// Draws a uniformly random target from `roster` and resets the round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyRoster`] and leaves the session untouched
    /// when the roster is empty.
    #[instrument(skip(self, roster, rng), fields(roster_len = roster.len()))]
    pub fn pick_random_target<R: Rng + ?Sized>(
        &mut self,
        roster: &Roster,
        rng: &mut R,
    ) -> Result<&Player, SessionError> {
        let target = roster.pick_random(rng).ok_or_else(|| {
            warn!("Roster is empty, no target selected");
            SessionError::EmptyRoster
        })?;
        Ok(self.start(target.clone()))
    }

    /// Starts a fresh round against `target`.
    #[instrument(skip(self, target), fields(target_id = %target.id()))]
    pub fn start(&mut self, target: Player) -> &Player {
        info!("Starting new round");
        self.guesses_left = MAX_GUESSES;
        self.elapsed = 0;
        self.history.clear();
        self.phase = Phase::Active;
        self.show_silhouette = false;
        self.target.insert(target)
    }

    /// True once the round has been won or lost.
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Evaluates a typed name against the target.
    #[instrument(skip(self, roster), fields(phase = %self.phase, guesses_left = self.guesses_left))]
    pub fn submit_guess(&mut self, roster: &Roster, raw_name: &str) -> GuessOutcome {
        let Some(target) = self.target.as_ref() else {
            debug!("No target selected, ignoring guess");
            return GuessOutcome::Ignored;
        };
        if self.guesses_left == 0 || self.phase != Phase::Active {
            debug!("Round not accepting guesses");
            return GuessOutcome::Ignored;
        }

        let name = normalize_name(raw_name);
        let Some(found) = roster.find_by_name(&name) else {
            info!(name = %name, "Guessed name not on roster");
            return GuessOutcome::NotFound;
        };

        let feedback = Feedback::evaluate(found, target);
        self.history.push(Guess { name, feedback });

        if found.id() == target.id() {
            let answer = target.name().clone();
            info!(attempts = self.history.len(), "Target guessed");
            self.phase = Phase::Won;
            self.show_silhouette = true;
            return GuessOutcome::Correct { answer };
        }

        self.guesses_left = self.guesses_left.saturating_sub(1);
        if self.guesses_left == 0 {
            let answer = target.name().clone();
            info!("Guesses exhausted");
            self.phase = Phase::Lost;
            return GuessOutcome::GameOver { answer };
        }

        debug!(remaining = self.guesses_left, "Incorrect guess");
        GuessOutcome::Incorrect {
            remaining: self.guesses_left,
        }
    }

    /// Counts one second. Only active rounds accumulate time.
    pub fn tick(&mut self) -> bool {
        if self.phase == Phase::Active {
            self.elapsed += 1;
            true
        } else {
            false
        }
    }

    /// Flips the silhouette reveal while the round is active.
    ///
    /// Returns the flag after the call.
    #[instrument(skip(self))]
    pub fn toggle_silhouette(&mut self) -> bool {
        if self.phase == Phase::Active {
            self.show_silhouette = !self.show_silhouette;
            debug!(show_silhouette = self.show_silhouette, "Silhouette toggled");
        }
        self.show_silhouette
    }

    /// Image of the target that should currently be displayed.
    pub fn visible_image(&self) -> Option<AssetKind> {
        self.target.as_ref()?;
        match self.phase {
            Phase::Won => Some(AssetKind::Actual),
            _ if self.show_silhouette => Some(AssetKind::Headshot),
            _ => None,
        }
    }
}
