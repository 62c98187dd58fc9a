//! Per-attribute comparison of a guessed player against the target.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, instrument};

use crate::player::Player;

/// Equal / not-equal marker for categorical attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Match {
    /// Same value as the target.
    #[strum(to_string = "✅")]
    Same,
    /// Different value from the target.
    #[strum(to_string = "❌")]
    Different,
}

impl Match {
    /// Compares two categorical values.
    pub fn between(guess: &str, target: &str) -> Self {
        if guess == target {
            Self::Same
        } else {
            Self::Different
        }
    }
}

/// Three-way marker for ordered attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Trend {
    /// Guess equals the target.
    #[strum(to_string = "✅")]
    Exact,
    /// Guess is below the target; go up.
    #[strum(to_string = "⬆️")]
    TooLow,
    /// Guess is above the target; go down.
    #[strum(to_string = "⬇️")]
    TooHigh,
}

impl Trend {
    /// Compares two parsed values.
    ///
    /// An unparsed side never compares equal or lower, so it lands on
    /// [`Trend::TooHigh`].
    pub fn between(guess: Option<i64>, target: Option<i64>) -> Self {
        match (guess, target) {
            (Some(g), Some(t)) => match g.cmp(&t) {
                Ordering::Equal => Self::Exact,
                Ordering::Less => Self::TooLow,
                Ordering::Greater => Self::TooHigh,
            },
            _ => Self::TooHigh,
        }
    }
}

/// Jersey number marker: a [`Trend`] plus the one-off near miss.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum JerseyHint {
    /// Same number as the target.
    #[strum(to_string = "✅")]
    Exact,
    /// Off by exactly one.
    #[strum(to_string = "🟨")]
    Near,
    /// Guess is more than one below the target.
    #[strum(to_string = "⬆️")]
    TooLow,
    /// Guess is more than one above the target.
    #[strum(to_string = "⬇️")]
    TooHigh,
}

impl JerseyHint {
    /// Compares two parsed jersey numbers.
    pub fn between(guess: Option<i64>, target: Option<i64>) -> Self {
        match (guess, target) {
            (Some(g), Some(t)) if g == t => Self::Exact,
            (Some(g), Some(t)) if g.abs_diff(t) == 1 => Self::Near,
            (Some(g), Some(t)) if g < t => Self::TooLow,
            _ => Self::TooHigh,
        }
    }
}

/// Comparison result for one guess, carrying the guessed values for display.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Feedback {
    /// Guessed player's team.
    team: String,
    /// Team marker.
    team_match: Match,
    /// Guessed player's position.
    position: String,
    /// Position marker.
    position_match: Match,
    /// Guessed player's conference.
    conference: String,
    /// Bare conference marker.
    conference_match: Match,
    /// Guessed player's height as written.
    height: String,
    /// Height marker, compared in inches.
    height_trend: Trend,
    /// Guessed player's age.
    age: i64,
    /// Age marker.
    age_trend: Trend,
    /// Parsed jersey number of the guessed player.
    number: Option<i64>,
    /// Jersey marker.
    number_hint: JerseyHint,
}

impl Feedback {
    /// Evaluates `guess` against `target`.
    #[instrument(skip_all, fields(guess = %guess.name(), target_id = %target.id()))]
    pub fn evaluate(guess: &Player, target: &Player) -> Self {
        let feedback = Self {
            team: guess.team().clone(),
            team_match: Match::between(guess.team(), target.team()),
            position: guess.position().clone(),
            position_match: Match::between(guess.position(), target.position()),
            conference: guess.conference().clone(),
            conference_match: Match::between(guess.conference(), target.conference()),
            height: guess.height().to_string(),
            height_trend: Trend::between(guess.height().inches(), target.height().inches()),
            age: *guess.age(),
            age_trend: Trend::between(Some(*guess.age()), Some(*target.age())),
            number: guess.number().value(),
            number_hint: JerseyHint::between(guess.number().value(), target.number().value()),
        };
        debug!(?feedback, "Evaluated guess");
        feedback
    }

    /// Team cell, e.g. `Ravens ✅`.
    pub fn team_text(&self) -> String {
        format!("{} {}", self.team, self.team_match)
    }

    /// Position cell, e.g. `QB ❌`.
    pub fn position_text(&self) -> String {
        format!("{} {}", self.position, self.position_match)
    }

    /// Conference cell, e.g. `AFC ✅`.
    pub fn conference_text(&self) -> String {
        format!("{} {}", self.conference, self.conference_match)
    }

    /// Height cell, e.g. `6'1 ⬆️`.
    pub fn height_text(&self) -> String {
        format!("{} {}", self.height, self.height_trend)
    }

    /// Age cell, marker first, e.g. `⬇️ 27`.
    pub fn age_text(&self) -> String {
        format!("{} {}", self.age_trend, self.age)
    }

    /// Jersey cell, e.g. `11 🟨`. An unparsed number shows as `?`.
    pub fn number_text(&self) -> String {
        match self.number {
            Some(n) => format!("{} {}", n, self.number_hint),
            None => format!("? {}", self.number_hint),
        }
    }
}
