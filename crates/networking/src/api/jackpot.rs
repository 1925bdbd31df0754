//! Jackpot stats feed (EGT), separate from the GraphQL endpoint

use ambet_core::{Error, JackpotStats, Result};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Fixed stats URL of the jackpot provider
pub const JACKPOT_STATS_URL: &str =
    "https://ambassadoribetge-api-prod-bgsp.egt-ong.com/api/jackpot/stats";

/// Unauthenticated client for the jackpot provider's stats endpoint.
/// The overlays poll this on a timer and re-render CSS from the result.
pub struct JackpotFeed {
    http: Client,
}

impl JackpotFeed {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Fetch the current stats snapshot
    #[instrument(skip(self))]
    pub async fn fetch_stats(&self) -> Result<JackpotStats> {
        let response = self.http.get(JACKPOT_STATS_URL).send().await?;

        let response = response.error_for_status().map_err(|e| {
            error!("Jackpot stats request failed: {}", e);
            Error::NetworkError(e.to_string())
        })?;

        let stats: JackpotStats = response.json().await.map_err(|e| {
            error!("Failed to parse jackpot stats: {}", e);
            Error::InvalidResponse(e.to_string())
        })?;

        debug!("Jackpot stats fetched");
        Ok(stats)
    }
}

impl Default for JackpotFeed {
    fn default() -> Self {
        Self::new()
    }
}
