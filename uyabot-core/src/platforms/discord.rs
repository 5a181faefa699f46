use std::slice;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use twilight_http::Client as DiscordHttp;
use twilight_http::client::ClientBuilder;
use twilight_http::error::ErrorType;
use twilight_model::channel::ChannelType;
use twilight_model::channel::message::Embed;
use twilight_model::id::Id;
use twilight_model::id::marker::ChannelMarker;

use uyabot_common::error::PublishError;
use uyabot_common::models::{PublishedMessage, TextChannel};
use uyabot_common::traits::api::StatusChannelApi;

/// Publishes status messages through Discord's REST API. No gateway
/// connection is needed for sending or editing.
pub struct DiscordStatusChannel {
    http: Arc<DiscordHttp>,
}

impl DiscordStatusChannel {
    pub fn new(http: Arc<DiscordHttp>) -> Self {
        Self { http }
    }

    pub fn from_token(token: String) -> Self {
        let http = ClientBuilder::new()
            .token(token)
            .timeout(Duration::from_secs(30))
            .build();
        Self::new(Arc::new(http))
    }
}

/// Channel kinds a bot can post an embed into.
pub fn accepts_messages(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::GuildText
            | ChannelType::GuildAnnouncement
            | ChannelType::AnnouncementThread
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
            | ChannelType::GuildVoice
            | ChannelType::GuildStageVoice
            | ChannelType::Private
            | ChannelType::Group
    )
}

fn is_not_found(err: &twilight_http::Error) -> bool {
    matches!(err.kind(), ErrorType::Response { status, .. } if status.get() == 404)
}

#[async_trait]
impl StatusChannelApi for DiscordStatusChannel {
    async fn resolve_channel(
        &self,
        channel_id: Id<ChannelMarker>,
    ) -> Result<Option<TextChannel>, PublishError> {
        let response = match self.http.channel(channel_id).await {
            Ok(resp) => resp,
            Err(e) if is_not_found(&e) => {
                warn!("Discord channel {} not found", channel_id);
                return Ok(None);
            }
            Err(e) => {
                return Err(PublishError::Resolve {
                    channel_id: channel_id.get(),
                    detail: format!("{e:?}"),
                });
            }
        };

        let channel = response.model().await.map_err(|e| PublishError::Resolve {
            channel_id: channel_id.get(),
            detail: format!("{e:?}"),
        })?;

        if !accepts_messages(channel.kind) {
            debug!("Channel {} has kind {:?}, not postable", channel_id, channel.kind);
            return Ok(None);
        }

        Ok(Some(TextChannel {
            id: channel.id,
            kind: channel.kind,
        }))
    }

    async fn send_embed(
        &self,
        channel: &TextChannel,
        embed: &Embed,
    ) -> Result<PublishedMessage, PublishError> {
        let send_error = |detail: String| PublishError::Send {
            channel_id: channel.id.get(),
            detail,
        };

        let message = self
            .http
            .create_message(channel.id)
            .embeds(slice::from_ref(embed))
            .await
            .map_err(|e| send_error(format!("{e:?}")))?
            .model()
            .await
            .map_err(|e| send_error(format!("{e:?}")))?;

        Ok(PublishedMessage {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn edit_embed(
        &self,
        message: &PublishedMessage,
        embed: &Embed,
    ) -> Result<(), PublishError> {
        self.http
            .update_message(message.channel_id, message.message_id)
            .embeds(Some(slice::from_ref(embed)))
            .await
            .map_err(|e| PublishError::Edit {
                message_id: message.message_id.get(),
                detail: format!("{e:?}"),
            })?;
        Ok(())
    }
}
