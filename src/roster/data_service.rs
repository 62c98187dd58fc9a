//! Roster read from the hosted tabular data service.

use async_trait::async_trait;
use phee_core::Player;
use tracing::{debug, info, instrument};

use super::{RosterError, RosterSource};

/// Reads every row of the players table through the service's REST endpoint.
///
/// Issues `GET {base_url}/rest/v1/{table}?select=*` with the access key sent
/// both as `apikey` and as a bearer token.
#[derive(Debug, Clone)]
pub struct DataServiceRoster {
    base_url: String,
    table: String,
    api_key: String,
    client: reqwest::Client,
}

impl DataServiceRoster {
    /// Creates a source for `table` at `base_url`.
    #[instrument(skip_all, fields(base_url = %base_url, table = %table))]
    pub fn new(base_url: String, table: String, api_key: String) -> Self {
        debug!("Creating data service roster source");
        Self {
            base_url,
            table,
            api_key,
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint selecting all rows.
    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }
}

#[async_trait]
impl RosterSource for DataServiceRoster {
    #[instrument(skip(self), fields(table = %self.table))]
    async fn fetch_players(&self) -> Result<Vec<Player>, RosterError> {
        let url = self.table_url();
        info!(url = %url, "Fetching players");

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!(status = %status, body = %body, "Data service returned an error");
            return Err(RosterError::new(format!(
                "Data service error {}: {}",
                status, body
            )));
        }

        let players: Vec<Player> = serde_json::from_str(&body)?;
        info!(count = players.len(), "Players fetched");
        Ok(players)
    }
}
