//! InMemory Conversation Repository 実装

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Conversation, ConversationId, ConversationRepository, MessageText, RepositoryError,
    Timestamp, UserId,
};

/// インメモリ Conversation Repository 実装
#[derive(Default)]
pub struct InMemoryConversationRepository {
    conversations: Mutex<Vec<Conversation>>,
}

impl InMemoryConversationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationRepository for InMemoryConversationRepository {
    async fn find_or_insert(&self, candidate: Conversation) -> Conversation {
        let mut conversations = self.conversations.lock().await;
        let [a, b] = &candidate.participants;
        if let Some(existing) = conversations.iter().find(|c| c.is_between(a, b)) {
            return existing.clone();
        }
        conversations.push(candidate.clone());
        candidate
    }

    async fn find_by_id(&self, id: &ConversationId) -> Result<Conversation, RepositoryError> {
        let conversations = self.conversations.lock().await;
        conversations
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::ConversationNotFound(id.to_string()))
    }

    async fn list_for_user(&self, user_id: &UserId) -> Vec<Conversation> {
        let conversations = self.conversations.lock().await;
        let mut mine: Vec<Conversation> = conversations
            .iter()
            .filter(|c| c.involves(user_id))
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.last_message_at.cmp(&a.last_message_at));
        mine
    }

    async fn record_last_message(
        &self,
        id: &ConversationId,
        text: &MessageText,
        at: Timestamp,
    ) -> Result<(), RepositoryError> {
        let mut conversations = self.conversations.lock().await;
        let conversation = conversations
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| RepositoryError::ConversationNotFound(id.to_string()))?;
        conversation.touch(text, at);
        Ok(())
    }
}
