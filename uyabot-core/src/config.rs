// File: uyabot-core/src/config.rs

use std::path::Path;
use std::time::Duration;

use tracing::info;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;
use url::Url;

use uyabot_common::models::LookupTables;

use crate::Error;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Validated settings for the players online task.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// Always ends in `/` so endpoint paths join beneath it.
    pub api_url: Url,
    pub channel_id: Id<ChannelMarker>,
    pub interval: Duration,
    pub tables: LookupTables,
}

impl StatusConfig {
    pub fn new(
        api_url: &str,
        channel_id: u64,
        interval: Duration,
        tables: LookupTables,
    ) -> Result<Self, Error> {
        let mut api_url = Url::parse(api_url.trim())
            .map_err(|e| Error::Config(format!("Invalid API URL '{api_url}': {e}")))?;
        if api_url.cannot_be_a_base() {
            return Err(Error::Config(format!("API URL '{api_url}' cannot be a base URL")));
        }
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        let channel_id = Id::<ChannelMarker>::new_checked(channel_id)
            .ok_or_else(|| Error::Config("Channel ID must be non-zero".to_string()))?;

        if interval.is_zero() {
            return Err(Error::Config("Polling interval must be non-zero".to_string()));
        }

        Ok(Self {
            api_url,
            channel_id,
            interval,
            tables,
        })
    }

    /// Like [`StatusConfig::new`], loading lookup tables from a JSON file
    /// when one is given and falling back to the built-in tables otherwise.
    pub fn with_tables_file(
        api_url: &str,
        channel_id: u64,
        interval: Duration,
        tables_path: Option<&Path>,
    ) -> Result<Self, Error> {
        let tables = match tables_path {
            Some(path) => {
                info!("Loading lookup tables from {}", path.display());
                LookupTables::from_json_file(path)?
            }
            None => LookupTables::default(),
        };
        Self::new(api_url, channel_id, interval, tables)
    }
}
