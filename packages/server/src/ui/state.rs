//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{ConversationRepository, MessageRepository, PresenceRepository, ProfileRepository},
    infrastructure::repository::{
        InMemoryConversationRepository, InMemoryMessageRepository, InMemoryPresenceRepository,
        InMemoryProfileRepository,
    },
};

/// Shared application state
///
/// 各 Repository は trait object として保持し、実装の差し替えを可能にする。
pub struct AppState {
    /// 接続とプレゼンス（WebSocket 中継用）
    pub presence: Arc<dyn PresenceRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub conversations: Arc<dyn ConversationRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl AppState {
    /// すべてインメモリ実装で構成する
    pub fn new_in_memory() -> Self {
        Self {
            presence: Arc::new(InMemoryPresenceRepository::new()),
            profiles: Arc::new(InMemoryProfileRepository::new()),
            conversations: Arc::new(InMemoryConversationRepository::new()),
            messages: Arc::new(InMemoryMessageRepository::new()),
        }
    }
}
