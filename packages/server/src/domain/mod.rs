//! Domain layer for Roomie.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod profile;
pub mod repository;
pub mod value_object;

pub use entity::{Conversation, DirectMessage, PresenceEntry, PresenceRegistry, RegisterOutcome};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{ConnectionIdFactory, ConversationIdFactory, MessageIdFactory};
pub use profile::{Profile, ProfileQuery, ProfileUpdate, SEARCH_RESULT_LIMIT};
pub use repository::{
    ConversationRepository, MessageRepository, PresenceRepository, ProfileRepository,
};
pub use value_object::{ConnectionId, ConversationId, MessageId, MessageText, Timestamp, UserId};
