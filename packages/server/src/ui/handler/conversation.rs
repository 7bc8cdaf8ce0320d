//! Conversation endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};

use roomie_shared::time::millis_to_rfc3339;

use crate::{
    domain::UserId,
    infrastructure::dto::http::{
        ConversationDto, ConversationSummaryDto, FindOrCreateConversationRequest,
    },
    ui::{
        error::ApiError,
        extract::{ApiJson, CallerId},
        state::AppState,
    },
    usecase::{FindOrCreateConversationUseCase, ListConversationsUseCase},
};

/// `POST /api/conversations/find-or-create`
pub async fn find_or_create_conversation(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    ApiJson(request): ApiJson<FindOrCreateConversationRequest>,
) -> Result<Json<ConversationDto>, ApiError> {
    let receiver = UserId::new(request.receiver_id)?;
    let usecase = FindOrCreateConversationUseCase::new(state.conversations.clone());
    let conversation = usecase.execute(caller, receiver).await?;
    Ok(Json(conversation.into()))
}

/// `GET /api/conversations`
pub async fn list_conversations(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
) -> Json<Vec<ConversationSummaryDto>> {
    let usecase =
        ListConversationsUseCase::new(state.conversations.clone(), state.profiles.clone());
    let summaries = usecase
        .execute(&caller)
        .await
        .into_iter()
        .map(|summary| ConversationSummaryDto {
            id: summary.conversation.id.as_str().to_string(),
            recipient_id: summary.recipient_id.into_string(),
            recipient_name: summary.recipient_name,
            last_message: summary.conversation.last_message,
            last_message_time: millis_to_rfc3339(summary.conversation.last_message_at.value()),
        })
        .collect();
    Json(summaries)
}
