// File: uyabot-core/src/publisher.rs

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use uyabot_common::error::PublishError;
use uyabot_common::models::{PublishedMessage, StatusDocument, TextChannel};
use uyabot_common::traits::api::StatusChannelApi;

use crate::render::to_embed;

/// The one status message this process keeps up to date.
///
/// Empty until the first successful send. After that the handle is only
/// ever edited, never replaced, so the channel holds a single status post.
/// A failed edit leaves the handle in place; the next cycle edits it again.
#[derive(Debug, Clone, Default)]
pub struct PublisherState {
    message: Option<PublishedMessage>,
}

impl PublisherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&PublishedMessage> {
        self.message.as_ref()
    }
}

/// Edits the retained status message, or sends a new one and retains it.
pub async fn publish(
    api: &dyn StatusChannelApi,
    channel: &TextChannel,
    state: &mut PublisherState,
    document: &StatusDocument,
    updated_at: DateTime<Utc>,
) -> Result<(), PublishError> {
    let embed = to_embed(document, updated_at);

    match state.message {
        Some(message) => {
            api.edit_embed(&message, &embed).await?;
            debug!(
                "Edited status message {} in channel {}",
                message.message_id, message.channel_id
            );
        }
        None => {
            let message = api.send_embed(channel, &embed).await?;
            info!(
                "Posted status message {} in channel {}",
                message.message_id, message.channel_id
            );
            state.message = Some(message);
        }
    }

    Ok(())
}
