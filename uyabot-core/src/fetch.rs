// File: uyabot-core/src/fetch.rs

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use uyabot_common::error::{Endpoint, FetchError};
use uyabot_common::models::{GameRecord, PlayerRecord};

use crate::http::HttpClient;

/// Players and games as returned by one poll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub players: Vec<PlayerRecord>,
    pub games: Vec<GameRecord>,
}

/// Reads both endpoints under `base_url`. Both must answer 2xx; the players
/// failure is reported first when both fail.
pub async fn fetch_snapshot(
    http: &dyn HttpClient,
    base_url: &Url,
) -> Result<Snapshot, FetchError> {
    let (players, games) = tokio::join!(
        fetch_endpoint::<PlayerRecord>(http, base_url, Endpoint::Players),
        fetch_endpoint::<GameRecord>(http, base_url, Endpoint::Games),
    );
    let players = players?;
    let games = games?;

    debug!(
        "Fetched snapshot with {} players and {} games",
        players.len(),
        games.len()
    );
    Ok(Snapshot { players, games })
}

async fn fetch_endpoint<T: DeserializeOwned>(
    http: &dyn HttpClient,
    base_url: &Url,
    endpoint: Endpoint,
) -> Result<Vec<T>, FetchError> {
    let url = base_url
        .join(endpoint.path())
        .map_err(|e| FetchError::Transport {
            endpoint,
            detail: format!("bad URL: {e}"),
        })?;

    let mut headers = HashMap::new();
    headers.insert("Accept".to_string(), "application/json".to_string());

    let response = http
        .get(url.as_str(), headers)
        .await
        .map_err(|e| FetchError::Transport {
            endpoint,
            detail: e.to_string(),
        })?;

    if !response.is_success() {
        warn!("GET {} returned HTTP {}", url, response.status);
        return Err(FetchError::Status {
            endpoint,
            status: response.status,
            detail: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| FetchError::Decode {
        endpoint,
        detail: e.to_string(),
    })
}
