use serde::{Deserialize, Serialize};

use super::wire;

/// A player sitting in a game lobby. The games endpoint sends more fields
/// per lobby member, only the name is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyPlayer {
    pub username: String,
}

/// One entry of `GET /robo/games`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Base64 encoded lobby name.
    #[serde(default, deserialize_with = "wire::text")]
    pub game_name: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub game_mode: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub submode: String,
    #[serde(default, deserialize_with = "wire::code")]
    pub map: String,
    #[serde(default, deserialize_with = "wire::code")]
    pub game_length: String,
    #[serde(default, deserialize_with = "wire::optional_number")]
    pub frag: Option<i64>,
    #[serde(default, deserialize_with = "wire::optional_number")]
    pub cap_limit: Option<i64>,
    #[serde(default)]
    pub max_players: u32,
    /// Unix seconds the match started at, 0 while still in the lobby.
    #[serde(default, deserialize_with = "wire::epoch_seconds")]
    pub started_date: i64,
    #[serde(default)]
    pub players: Vec<LobbyPlayer>,
}

impl GameRecord {
    pub fn has_lobby(&self) -> bool {
        !self.players.is_empty()
    }

    pub fn is_started(&self) -> bool {
        self.started_date > 0
    }
}
