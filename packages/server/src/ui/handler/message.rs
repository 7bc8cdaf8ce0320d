//! Stored-message endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{ConversationId, MessageText},
    infrastructure::dto::http::{MessageDto, PostMessageRequest},
    ui::{
        error::ApiError,
        extract::{ApiJson, CallerId},
        state::AppState,
    },
    usecase::{ListMessagesUseCase, PostMessageUseCase},
};

/// `POST /api/messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    ApiJson(request): ApiJson<PostMessageRequest>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let conversation_id = ConversationId::new(request.conversation_id)?;
    let text = MessageText::new(request.text)?;

    let usecase = PostMessageUseCase::new(state.conversations.clone(), state.messages.clone());
    let message = usecase.execute(caller, conversation_id, text).await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}

/// `GET /api/messages/{conversation_id}`
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    CallerId(caller): CallerId,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let conversation_id = ConversationId::new(conversation_id)?;

    let usecase = ListMessagesUseCase::new(state.conversations.clone(), state.messages.clone());
    let messages = usecase.execute(&caller, &conversation_id).await?;
    Ok(Json(messages.into_iter().map(MessageDto::from).collect()))
}
