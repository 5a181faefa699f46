use chrono::{DateTime, Utc};
use twilight_model::channel::message::Embed;
use twilight_model::util::Timestamp;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};

use uyabot_common::models::StatusDocument;

pub const ACCENT_COLOR: u32 = 0xFFA000;
pub const FOOTER_TEXT: &str = "Last Updated";

/// Builds the Discord embed for a status document, stamped with `updated_at`.
pub fn to_embed(document: &StatusDocument, updated_at: DateTime<Utc>) -> Embed {
    let mut builder = EmbedBuilder::new()
        .color(ACCENT_COLOR)
        .title(document.title.clone())
        .description(document.header.clone())
        .footer(EmbedFooterBuilder::new(FOOTER_TEXT));

    if let Ok(timestamp) = Timestamp::from_secs(updated_at.timestamp()) {
        builder = builder.timestamp(timestamp);
    }

    for section in &document.sections {
        builder = builder.field(EmbedFieldBuilder::new(section.name.clone(), section.value.clone()));
    }

    builder.build()
}
