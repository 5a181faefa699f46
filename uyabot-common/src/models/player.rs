use serde::{Deserialize, Serialize};

use super::wire;

/// One entry of `GET /robo/players`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub username: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub region: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub clan: String,
    #[serde(default, deserialize_with = "wire::text")]
    pub clan_tag: String,
    #[serde(default, deserialize_with = "wire::code")]
    pub status: String,
}

impl PlayerRecord {
    /// `[TAG]`, or nothing when the player has no clan tag.
    pub fn clan_tag_label(&self) -> String {
        if self.clan_tag.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.clan_tag)
        }
    }
}
