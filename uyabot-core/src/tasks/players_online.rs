use std::sync::Arc;

use chrono::Utc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use uyabot_common::traits::api::StatusChannelApi;

use crate::Error;
use crate::config::StatusConfig;
use crate::fetch::fetch_snapshot;
use crate::http::HttpClient;
use crate::publisher::{PublisherState, publish};
use crate::render::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Published,
    /// The configured channel is missing or cannot take messages.
    Skipped,
}

/// One poll: resolve the channel, fetch, render, publish.
///
/// A fetch failure ends the cycle before anything is rendered or sent.
pub async fn run_cycle(
    api: &dyn StatusChannelApi,
    http: &dyn HttpClient,
    config: &StatusConfig,
    state: &mut PublisherState,
) -> Result<CycleOutcome, Error> {
    let channel = match api.resolve_channel(config.channel_id).await? {
        Some(channel) => channel,
        None => {
            debug!(
                "Channel {} is missing or not a text channel, skipping",
                config.channel_id
            );
            return Ok(CycleOutcome::Skipped);
        }
    };

    let snapshot = fetch_snapshot(http, &config.api_url).await?;

    let now = Utc::now();
    let document = render(&snapshot.players, &snapshot.games, &config.tables, now);

    publish(api, &channel, state, &document, now).await?;
    Ok(CycleOutcome::Published)
}

/// Spawns a background task that runs a cycle immediately and then once per
/// configured interval. The publisher state lives inside the task.
pub fn spawn_players_online_task(
    api: Arc<dyn StatusChannelApi>,
    http: Arc<dyn HttpClient>,
    config: StatusConfig,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Players online task started for channel {} (every {:?})",
            config.channel_id, config.interval
        );

        let mut state = PublisherState::new();
        let mut ticker = interval(config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match run_cycle(api.as_ref(), http.as_ref(), &config, &mut state).await {
                Ok(outcome) => debug!("Players online check finished: {:?}", outcome),
                Err(e) => error!("Players online check failed: {}", e),
            }
        }
    })
}
