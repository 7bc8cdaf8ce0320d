//! Repository traits.
//!
//! The domain layer owns these abstractions; the infrastructure layer
//! provides the implementations (dependency inversion). Use cases depend on
//! `Arc<dyn ...Repository>` only.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    ConnectionId, Conversation, ConversationId, DirectMessage, MessageText, PresenceEntry,
    Profile, ProfileQuery, ProfileUpdate, RegisterOutcome, RepositoryError, Timestamp, UserId,
};

/// Live connections and the presence registry, guarded as one unit.
///
/// `register` and `detach` publish the fresh online list to every attached
/// connection before returning, and before any other presence operation can
/// run, so broadcasts go out in mutation order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceRepository: Send + Sync {
    /// Attach an accepted connection so it can receive broadcasts and relays.
    async fn attach(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    );

    /// Register `user_id` on `connection_id`, then broadcast the online list.
    async fn register(&self, user_id: UserId, connection_id: ConnectionId) -> RegisterOutcome;

    /// Drop the connection and its presence entry, then broadcast the online list.
    ///
    /// Returns the removed presence entry, if the connection had registered.
    async fn detach(&self, connection_id: &ConnectionId) -> Option<PresenceEntry>;

    /// Connection currently registered for `user_id`
    async fn lookup(&self, user_id: &UserId) -> Option<ConnectionId>;

    /// When `connection_id` was attached, if it is still attached
    async fn connected_at(&self, connection_id: &ConnectionId) -> Option<Timestamp>;

    /// Push an encoded event to one connection.
    ///
    /// Returns `false` if the connection is gone; callers treat that like a
    /// successful send.
    async fn deliver(&self, connection_id: &ConnectionId, payload: String) -> bool;

    /// Registered users in registration order
    async fn online_users(&self) -> Vec<PresenceEntry>;

    /// Number of attached connections (registered or not)
    async fn count_connections(&self) -> usize;
}

/// Conversation (thread) store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Return the conversation between the candidate's two participants, or
    /// store `candidate` if there is none. Atomic per pair.
    async fn find_or_insert(&self, candidate: Conversation) -> Conversation;

    async fn find_by_id(&self, id: &ConversationId) -> Result<Conversation, RepositoryError>;

    /// Conversations `user_id` participates in, latest activity first
    async fn list_for_user(&self, user_id: &UserId) -> Vec<Conversation>;

    /// Update the last-message preview of a conversation
    async fn record_last_message(
        &self,
        id: &ConversationId,
        text: &MessageText,
        at: Timestamp,
    ) -> Result<(), RepositoryError>;
}

/// Stored message store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn append(&self, message: DirectMessage);

    /// Messages of one conversation in append order
    async fn list_by_conversation(&self, id: &ConversationId) -> Vec<DirectMessage>;
}

/// Profile store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self, user_id: &UserId) -> Result<Profile, RepositoryError>;

    /// Apply `update` to the user's profile, creating it first if missing.
    async fn upsert(&self, user_id: UserId, update: ProfileUpdate, at: Timestamp) -> Profile;

    /// Complete profiles matching `query`, excluding `exclude`, ordered by user id
    async fn search(&self, query: &ProfileQuery, exclude: &UserId, limit: usize) -> Vec<Profile>;
}
