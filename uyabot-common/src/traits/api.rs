// ================================================================
// File: uyabot-common/src/traits/api.rs
// ================================================================

use async_trait::async_trait;
use twilight_model::channel::message::Embed;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;

use crate::error::PublishError;
use crate::models::status::{PublishedMessage, TextChannel};

/// The slice of a chat session the status publisher needs.
#[async_trait]
pub trait StatusChannelApi: Send + Sync {
    /// Returns `None` when the channel does not exist or cannot take messages.
    async fn resolve_channel(
        &self,
        channel_id: Id<ChannelMarker>,
    ) -> Result<Option<TextChannel>, PublishError>;

    async fn send_embed(
        &self,
        channel: &TextChannel,
        embed: &Embed,
    ) -> Result<PublishedMessage, PublishError>;

    async fn edit_embed(
        &self,
        message: &PublishedMessage,
        embed: &Embed,
    ) -> Result<(), PublishError>;
}
