//! Roster providers.

mod data_service;
mod error;
mod file;

pub use data_service::DataServiceRoster;
pub use error::RosterError;
pub use file::FileRoster;

use async_trait::async_trait;
use phee_core::{Player, Roster};
use tracing::{error, info, instrument};

use crate::config::PheeConfig;

/// Something that can deliver the full list of players.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Reads all players, in table order.
    async fn fetch_players(&self) -> Result<Vec<Player>, RosterError>;
}

/// Fetches the roster once.
///
/// A failed fetch is logged and yields an empty roster; there is no retry.
#[instrument(skip_all)]
pub async fn load_roster(source: &dyn RosterSource) -> Roster {
    match source.fetch_players().await {
        Ok(players) => {
            info!(count = players.len(), "Roster loaded");
            Roster::new(players)
        }
        Err(e) => {
            error!(error = %e, "Error fetching player data");
            Roster::default()
        }
    }
}

/// Chooses the roster source described by `config`.
///
/// A roster file wins over the data service.
#[instrument(skip(config))]
pub fn source_from_config(config: &PheeConfig) -> Result<Box<dyn RosterSource>, RosterError> {
    if let Some(path) = config.roster_file() {
        info!(path = %path.display(), "Using roster file");
        return Ok(Box::new(FileRoster::new(path.clone())));
    }

    let url = config
        .data_url()
        .clone()
        .ok_or_else(|| RosterError::new("No data service URL or roster file configured"))?;
    let key = config
        .data_key()
        .map_err(|e| RosterError::new(e.message))?;

    info!(url = %url, table = %config.players_table(), "Using data service");
    Ok(Box::new(DataServiceRoster::new(
        url,
        config.players_table().clone(),
        key,
    )))
}
