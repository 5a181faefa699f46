// File: uyabot-common/src/models/mod.rs
pub mod game;
pub mod lookup;
pub mod player;
pub mod status;
mod wire;

pub use game::{GameRecord, LobbyPlayer};
pub use lookup::LookupTables;
pub use player::PlayerRecord;
pub use status::{PLACEHOLDER, PublishedMessage, StatusDocument, StatusSection, TextChannel};
