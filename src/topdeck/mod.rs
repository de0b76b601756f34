use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::Tournament;

const DEFAULT_BASE_URL: &str = "https://api.topdeck.gg/v2";

#[derive(Debug, Error)]
pub enum TopdeckError {
    #[error("topdeck request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Upstream player search response. Records are passed through untouched,
/// so extra upstream fields survive the proxy.
#[derive(Debug, Deserialize, Default)]
struct PlayerSearchResponse {
    #[serde(default)]
    players: Vec<Value>,
}

/// Client for the Topdeck.gg v2 API. Carries the API key read once at
/// startup; cloned into each request handler.
#[derive(Clone)]
pub struct TopdeckClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TopdeckClient {
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Self {
        TopdeckClient {
            http: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: api_key.into(),
        }
    }

    /// GET {base}/tournaments/{id}
    pub async fn fetch_tournament(&self, id: &str) -> Result<Tournament, TopdeckError> {
        let url = format!("{}/tournaments/{}", self.base_url, id);
        let tournament = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<Tournament>()
            .await?;

        Ok(tournament)
    }

    /// GET {base}/players?search={query} - substring search across
    /// tournaments.
    pub async fn search_players(&self, query: &str) -> Result<Vec<Value>, TopdeckError> {
        let url = format!("{}/players", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("search", query)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<PlayerSearchResponse>()
            .await?;

        Ok(response.players)
    }
}
