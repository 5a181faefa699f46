use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use uyabot_common::traits::api::StatusChannelApi;
use uyabot_core::platforms::DiscordStatusChannel;
use uyabot_core::tasks::players_online::spawn_players_online_task;
use uyabot_core::{DefaultHttpClient, HttpClient, StatusConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "uyabot")]
#[command(author, version, about = "UYA Online - keeps a live players online post in a Discord channel")]
struct Args {
    /// Base URL of the game server API
    #[arg(long, env = "UYA_SERVER_API_URL")]
    api_url: String,

    /// Discord channel that holds the status post
    #[arg(long, env = "UYA_PLAYERS_ONLINE_CHANNEL_ID")]
    channel_id: u64,

    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    discord_token: String,

    /// Seconds between checks
    #[arg(long, env = "UYA_PLAYERS_ONLINE_INTERVAL_SECS", default_value_t = 60)]
    interval_secs: u64,

    /// JSON file with map and time limit display names
    #[arg(long, env = "UYA_LOOKUP_TABLES")]
    lookup_tables: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env has to be loaded before clap reads the environment
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let config = StatusConfig::with_tables_file(
        &args.api_url,
        args.channel_id,
        Duration::from_secs(args.interval_secs),
        args.lookup_tables.as_deref(),
    )
    .context("invalid players online configuration")?;

    info!("Polling {} for players and games", config.api_url);

    let api: Arc<dyn StatusChannelApi> = Arc::new(DiscordStatusChannel::from_token(args.discord_token));
    let http: Arc<dyn HttpClient> = Arc::new(DefaultHttpClient::new());
    let task = spawn_players_online_task(api, http, config);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Ctrl-C received, shutting down");
        }
        res = task => {
            if let Err(e) = res {
                error!("Players online task ended unexpectedly: {:?}", e);
            }
        }
    }

    Ok(())
}
