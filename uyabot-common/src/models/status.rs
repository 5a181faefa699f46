use twilight_model::channel::ChannelType;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, MessageMarker};

/// Zero-width space. Discord rejects empty embed names and values.
pub const PLACEHOLDER: &str = "\u{200B}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSection {
    pub name: String,
    pub value: String,
}

impl StatusSection {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Everything the status message shows, built fresh each cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDocument {
    pub title: String,
    pub header: String,
    pub sections: Vec<StatusSection>,
}

impl StatusDocument {
    pub fn section(&self, name: &str) -> Option<&StatusSection> {
        self.sections.iter().find(|s| s.name == name)
    }
}

/// A channel known to accept messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChannel {
    pub id: Id<ChannelMarker>,
    pub kind: ChannelType,
}

/// Handle to the status message currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedMessage {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}
