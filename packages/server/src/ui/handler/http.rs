//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::websocket::OnlineUserInfo, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current presence snapshot, in registration order
pub async fn online_users(State(state): State<Arc<AppState>>) -> Json<Vec<OnlineUserInfo>> {
    let entries = state.presence.online_users().await;
    Json(entries.iter().map(OnlineUserInfo::from).collect())
}
