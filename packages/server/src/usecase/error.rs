//! UseCase 層のエラー定義

use thiserror::Error;

/// Errors from conversation use cases
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// A user cannot open a conversation with themselves
    #[error("Cannot start a conversation with yourself")]
    SelfConversation,
}

/// Errors from stored-message use cases
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// The caller is not one of the conversation's participants
    #[error("Not a participant of conversation {0}")]
    NotParticipant(String),

    /// The message was stored but the conversation could not be updated
    #[error("Failed to update conversation: {0}")]
    Storage(String),
}

/// Errors from profile use cases
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(String),
}
