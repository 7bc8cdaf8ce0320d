//! Domain factories for generating identifiers.
//!
//! Generation is kept apart from the validation logic in the value objects.

use super::{ConnectionId, ConversationId, MessageId};

/// Factory for ConnectionId instances assigned at WebSocket accept time.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    /// Generate a new ConnectionId with a random UUID v4.
    pub fn generate() -> ConnectionId {
        ConnectionId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for ConversationId instances.
pub struct ConversationIdFactory;

impl ConversationIdFactory {
    /// Generate a new ConversationId with a random UUID v4.
    pub fn generate() -> ConversationId {
        ConversationId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for MessageId instances.
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId::from_uuid(uuid::Uuid::new_v4())
    }
}
