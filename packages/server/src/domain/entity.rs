//! Core domain models: the presence registry, conversations and stored messages.

use serde::{Deserialize, Serialize};

use super::value_object::{
    ConnectionId, ConversationId, MessageId, MessageText, Timestamp, UserId,
};

/// One registered user and the connection it registered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceEntry {
    pub user_id: UserId,
    pub connection_id: ConnectionId,
}

impl PresenceEntry {
    pub fn new(user_id: UserId, connection_id: ConnectionId) -> Self {
        Self {
            user_id,
            connection_id,
        }
    }
}

/// Result of [`PresenceRegistry::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// A new entry was inserted
    Registered,
    /// The user already had an entry; it was left untouched
    AlreadyRegistered,
    /// The connection already carries another user; nothing changed
    ConnectionInUse,
}

/// In-memory map from user identity to live connection.
///
/// Entries keep registration order, which is the order of the broadcast
/// online list. There is at most one entry per connection and per user.
/// The first entry registered for a user wins: later registrations for the
/// same user are ignored until that entry's connection is unregistered.
/// Every operation is total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceRegistry {
    entries: Vec<PresenceEntry>,
}

impl PresenceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `user_id` on `connection_id` unless the user, or the
    /// connection, is already present.
    pub fn register(&mut self, user_id: UserId, connection_id: ConnectionId) -> RegisterOutcome {
        if self.entries.iter().any(|e| e.user_id == user_id) {
            return RegisterOutcome::AlreadyRegistered;
        }
        if self.entries.iter().any(|e| e.connection_id == connection_id) {
            return RegisterOutcome::ConnectionInUse;
        }
        self.entries.push(PresenceEntry::new(user_id, connection_id));
        RegisterOutcome::Registered
    }

    /// Remove the entry owned by `connection_id` and return it.
    ///
    /// Unknown connections are a no-op.
    pub fn unregister(&mut self, connection_id: &ConnectionId) -> Option<PresenceEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.connection_id == connection_id)?;
        Some(self.entries.remove(index))
    }

    /// Connection of the first entry registered for `user_id`, if any.
    pub fn lookup(&self, user_id: &UserId) -> Option<&ConnectionId> {
        self.entries
            .iter()
            .find(|e| &e.user_id == user_id)
            .map(|e| &e.connection_id)
    }

    /// Registered entries in registration order
    pub fn entries(&self) -> &[PresenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A direct-message thread between exactly two users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    /// Creator first, then the receiver
    pub participants: [UserId; 2],
    /// Text of the latest stored message (empty until the first one)
    pub last_message: String,
    pub last_message_at: Timestamp,
    pub created_at: Timestamp,
}

impl Conversation {
    /// Create a new empty conversation between `initiator` and `receiver`
    pub fn new(
        id: ConversationId,
        initiator: UserId,
        receiver: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            participants: [initiator, receiver],
            last_message: String::new(),
            last_message_at: created_at,
            created_at,
        }
    }

    /// Whether `user_id` is one of the two participants
    pub fn involves(&self, user_id: &UserId) -> bool {
        self.participants.iter().any(|p| p == user_id)
    }

    /// Whether this conversation is between `a` and `b`, in either order
    pub fn is_between(&self, a: &UserId, b: &UserId) -> bool {
        let [first, second] = &self.participants;
        (first == a && second == b) || (first == b && second == a)
    }

    /// The participant that is not `user_id`
    pub fn counterpart(&self, user_id: &UserId) -> Option<&UserId> {
        if !self.involves(user_id) {
            return None;
        }
        self.participants.iter().find(|p| *p != user_id)
    }

    /// Record the latest stored message
    pub fn touch(&mut self, text: &MessageText, at: Timestamp) {
        self.last_message = text.as_str().to_string();
        self.last_message_at = at;
    }
}

/// A persisted direct message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender: UserId,
    pub text: MessageText,
    pub created_at: Timestamp,
}

impl DirectMessage {
    pub fn new(
        id: MessageId,
        conversation_id: ConversationId,
        sender: UserId,
        text: MessageText,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            conversation_id,
            sender,
            text,
            created_at,
        }
    }
}
