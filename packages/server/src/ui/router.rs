//! Route table.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{handler, state::AppState};

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(handler::websocket_handler))
        .route("/api/health", get(handler::health_check))
        .route("/api/online-users", get(handler::online_users))
        .route(
            "/api/profile",
            get(handler::get_my_profile).put(handler::update_my_profile),
        )
        .route("/api/profile/search", get(handler::search_profiles))
        .route("/api/profile/{user_id}", get(handler::get_profile))
        .route(
            "/api/conversations/find-or-create",
            post(handler::find_or_create_conversation),
        )
        .route("/api/conversations", get(handler::list_conversations))
        .route("/api/messages", post(handler::post_message))
        .route("/api/messages/{conversation_id}", get(handler::list_messages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
