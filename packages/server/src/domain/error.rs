//! Domain layer error definitions.

use thiserror::Error;

/// Maximum accepted length of a chat text, in bytes.
pub const MESSAGE_TEXT_MAX_LEN: usize = 10_000;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,

    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,

    /// ConversationId validation error
    #[error("ConversationId cannot be empty")]
    ConversationIdEmpty,

    /// ConversationId / MessageId invalid format error (not a valid UUID format)
    #[error("identifier must be a valid UUID format (got: {0})")]
    InvalidUuidFormat(String),

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },
}

/// Errors returned by repositories backing the REST API
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No conversation with the given id
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// No profile for the given user
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
}
