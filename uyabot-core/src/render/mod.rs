// File: uyabot-core/src/render/mod.rs
//
// Turns one snapshot into the status document shown in the channel.
// Nothing in here fails: bad records degrade to empty fragments.

mod embed;

pub use embed::{ACCENT_COLOR, FOOTER_TEXT, to_embed};

use std::collections::HashSet;
use std::fmt::Write;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use chrono::{DateTime, Utc};
use tracing::debug;

use uyabot_common::models::{GameRecord, LookupTables, PLACEHOLDER, PlayerRecord, StatusDocument, StatusSection};

pub const ACTIVE_GAMES: &str = "Active Games:";
pub const CLANS_ONLINE: &str = "Clans Online";
pub const NO_CLANS: &str = "No Clans online";
pub const NO_GAMES: &str = "No Games";

const GAME_NAME_LEN: usize = 16;

/// Game names come from the server padded or unpadded; accept both.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn render(
    players: &[PlayerRecord],
    games: &[GameRecord],
    tables: &LookupTables,
    now: DateTime<Utc>,
) -> StatusDocument {
    let mut sections = vec![
        clans_section(players),
        StatusSection::new(PLACEHOLDER, ACTIVE_GAMES),
    ];

    let before = sections.len();
    sections.extend(
        games
            .iter()
            .filter(|game| game.has_lobby())
            .map(|game| game_section(game, tables, now)),
    );
    if sections.len() == before {
        sections.push(StatusSection::new(NO_GAMES, PLACEHOLDER));
    }

    StatusDocument {
        title: format!("Players Online - {}", players.len()),
        header: header_block(players),
        sections,
    }
}

fn header_block(players: &[PlayerRecord]) -> String {
    if players.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let lines: Vec<String> = players
        .iter()
        .map(|p| {
            format!(
                "\n {:<6} {} {} ",
                format!("[{}]", p.region),
                p.username,
                p.clan_tag_label()
            )
        })
        .collect();
    format!("```{}```", lines.join(" "))
}

/// First tag seen for a clan wins; players without a clan are skipped.
fn clans_section(players: &[PlayerRecord]) -> StatusSection {
    let mut seen = HashSet::new();
    let mut listing = String::new();
    for player in players {
        if player.clan.is_empty() || !seen.insert(player.clan.as_str()) {
            continue;
        }
        let _ = writeln!(listing, "{} [{}]", player.clan, player.clan_tag);
    }

    if listing.is_empty() {
        StatusSection::new(NO_CLANS, PLACEHOLDER)
    } else {
        StatusSection::new(CLANS_ONLINE, format!("```{listing}```"))
    }
}

fn game_section(game: &GameRecord, tables: &LookupTables, now: DateTime<Utc>) -> StatusSection {
    let name = format!(
        "{}  -  ({}/{}){}",
        decode_game_name(&game.game_name),
        game.players.len(),
        game.max_players,
        elapsed_suffix(game.started_date, now)
    );

    let limit_label = if game.game_mode == "Siege" { "" } else { "Frag/Cap Limit: " };
    let frag = nonzero(game.frag);
    let cap = nonzero(game.cap_limit);

    // Ascending by username.
    let mut usernames: Vec<&str> = game.players.iter().map(|p| p.username.as_str()).collect();
    usernames.sort_unstable();
    let roster = usernames
        .iter()
        .map(|name| format!("\n  {name}  "))
        .collect::<Vec<_>>()
        .join(" ");

    let value = format!(
        "```{} ({}) @ {}\nTime limit: {}\n{}{}{}\nPlayers:{}```",
        game.game_mode,
        game.submode,
        tables.map_name(&game.map),
        tables.time_limit_name(&game.game_length),
        limit_label,
        frag,
        cap,
        roster
    );

    StatusSection::new(name, value)
}

fn nonzero(limit: Option<i64>) -> String {
    match limit {
        Some(v) if v != 0 => v.to_string(),
        _ => String::new(),
    }
}

/// Base64 lobby name, read as 7-bit ASCII and cut to 16 characters.
pub fn decode_game_name(encoded: &str) -> String {
    match LENIENT_BASE64.decode(encoded.trim()) {
        Ok(bytes) => {
            let name: String = bytes
                .iter()
                .map(|b| char::from(b & 0x7f))
                .take(GAME_NAME_LEN)
                .collect();
            name.trim_matches(|c: char| c.is_whitespace() || c == '\0')
                .to_string()
        }
        Err(e) => {
            debug!("Could not decode game name '{}': {}", encoded, e);
            String::new()
        }
    }
}

/// `" @H:MM:SS"` since `started_date`, or nothing when the match has not
/// started or the start lies in the future.
pub fn elapsed_suffix(started_date: i64, now: DateTime<Utc>) -> String {
    if started_date <= 0 {
        return String::new();
    }
    let Some(started) = DateTime::<Utc>::from_timestamp(started_date, 0) else {
        return String::new();
    };
    let secs = now.signed_duration_since(started).num_seconds();
    if secs < 0 {
        return String::new();
    }
    format!(" @{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
