//! WebSocket message DTOs for the real-time channel.

use serde::{Deserialize, Serialize};

use crate::domain::PresenceEntry;

/// Message type enum for server → client events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    OnlineUsers,
    MessageReceived,
}

/// One registered user and its connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineUserInfo {
    pub user_id: String,
    pub connection_id: String,
}

impl From<&PresenceEntry> for OnlineUserInfo {
    fn from(entry: &PresenceEntry) -> Self {
        Self {
            user_id: entry.user_id.as_str().to_string(),
            connection_id: entry.connection_id.as_str().to_string(),
        }
    }
}

/// Full online list, broadcast to every connection after each registry change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineUsersMessage {
    pub r#type: MessageType,
    pub users: Vec<OnlineUserInfo>,
}

impl OnlineUsersMessage {
    pub fn from_entries(entries: &[PresenceEntry]) -> Self {
        Self {
            r#type: MessageType::OnlineUsers,
            users: entries.iter().map(OnlineUserInfo::from).collect(),
        }
    }
}

/// Chat text relayed to the receiver's connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReceivedMessage {
    pub r#type: MessageType,
    pub sender_id: String,
    pub text: String,
}

impl MessageReceivedMessage {
    pub fn new(sender_id: String, text: String) -> Self {
        Self {
            r#type: MessageType::MessageReceived,
            sender_id,
            text,
        }
    }
}

/// Client → server events, tagged by `type`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Bind this connection to an application user
    Register { user_id: String },
    /// Relay `text` to `receiver_id` if online
    SendMessage {
        sender_id: String,
        receiver_id: String,
        text: String,
    },
}
