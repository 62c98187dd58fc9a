//! In-memory roster of candidate players.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::name::names_match;
use crate::player::{Player, PlayerId};

/// Ordered collection of players, loaded once per process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates a roster preserving the given order.
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Returns the players in load order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// First player whose name matches, ignoring case and surrounding whitespace.
    #[instrument(skip(self), fields(roster_len = self.players.len()))]
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let found = self.players.iter().find(|p| names_match(p.name(), name));
        debug!(found = found.is_some(), "Roster lookup");
        found
    }

    /// True when a player with this identifier is on the roster.
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| p.id() == id)
    }

    /// Uniformly random player, `None` for an empty roster.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Player> {
        self.players.choose(rng)
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}
