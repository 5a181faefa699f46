// ================================================================
// File: uyabot-common/src/error.rs
// ================================================================

use std::fmt;

use thiserror::Error;

/// Which of the two server endpoints a fetch failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Players,
    Games,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Players => "players",
            Endpoint::Games => "games",
        }
    }

    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Players => "robo/players",
            Endpoint::Games => "robo/games",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status. `detail` is the raw body.
    #[error("{endpoint} endpoint returned HTTP {status}: {detail}")]
    Status {
        endpoint: Endpoint,
        status: u16,
        detail: String,
    },

    #[error("{endpoint} request failed: {detail}")]
    Transport { endpoint: Endpoint, detail: String },

    #[error("{endpoint} response could not be decoded: {detail}")]
    Decode { endpoint: Endpoint, detail: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Status { endpoint, .. }
            | FetchError::Transport { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => *endpoint,
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Could not look up channel {channel_id}: {detail}")]
    Resolve { channel_id: u64, detail: String },

    #[error("Sending status message to channel {channel_id} failed: {detail}")]
    Send { channel_id: u64, detail: String },

    #[error("Editing status message {message_id} failed: {detail}")]
    Edit { message_id: u64, detail: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
