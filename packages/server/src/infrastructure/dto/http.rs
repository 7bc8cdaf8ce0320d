//! HTTP API request and response DTOs.

use serde::{Deserialize, Serialize};

use roomie_shared::time::millis_to_rfc3339;

use crate::domain::{Conversation, DirectMessage, Profile, UserId};

/// Profile as returned by the profile endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub user_id: String,
    pub name: String,
    pub college_name: String,
    pub branch: String,
    pub year: String,
    pub gender: String,
    pub course: String,
    pub location: String,
    pub is_profile_complete: bool,
    pub updated_at: String, // ISO 8601
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id.into_string(),
            name: profile.name,
            college_name: profile.college_name,
            branch: profile.branch,
            year: profile.year,
            gender: profile.gender,
            course: profile.course,
            location: profile.location,
            is_profile_complete: profile.is_profile_complete,
            updated_at: millis_to_rfc3339(profile.updated_at.value()),
        }
    }
}

/// Body of find-or-create
#[derive(Debug, Clone, Deserialize)]
pub struct FindOrCreateConversationRequest {
    pub receiver_id: String,
}

/// Conversation as returned by find-or-create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDto {
    pub id: String,
    pub participants: Vec<String>,
    pub last_message: String,
    pub last_message_time: String, // ISO 8601
    pub created_at: String,        // ISO 8601
}

impl From<Conversation> for ConversationDto {
    fn from(conversation: Conversation) -> Self {
        Self {
            id: conversation.id.as_str().to_string(),
            participants: conversation
                .participants
                .into_iter()
                .map(UserId::into_string)
                .collect(),
            last_message: conversation.last_message,
            last_message_time: millis_to_rfc3339(conversation.last_message_at.value()),
            created_at: millis_to_rfc3339(conversation.created_at.value()),
        }
    }
}

/// Conversation list entry from the caller's point of view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummaryDto {
    pub id: String,
    pub recipient_id: String,
    pub recipient_name: String,
    pub last_message: String,
    pub last_message_time: String, // ISO 8601
}

/// Body of message post
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageRequest {
    pub conversation_id: String,
    pub text: String,
}

/// Stored message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub text: String,
    pub created_at: String, // ISO 8601
}

impl From<DirectMessage> for MessageDto {
    fn from(message: DirectMessage) -> Self {
        Self {
            id: message.id.as_str().to_string(),
            conversation_id: message.conversation_id.as_str().to_string(),
            sender_id: message.sender.into_string(),
            text: message.text.into_string(),
            created_at: millis_to_rfc3339(message.created_at.value()),
        }
    }
}

/// Error body for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}
