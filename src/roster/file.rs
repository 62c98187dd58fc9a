//! Roster read from a local JSON file.

use async_trait::async_trait;
use phee_core::Player;
use std::path::PathBuf;
use tracing::{info, instrument};

use super::{RosterError, RosterSource};

/// JSON array of player rows on disk, in the same shape the data service returns.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RosterSource for FileRoster {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_players(&self) -> Result<Vec<Player>, RosterError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let players: Vec<Player> = serde_json::from_str(&content)?;
        info!(count = players.len(), "Players read from file");
        Ok(players)
    }
}
