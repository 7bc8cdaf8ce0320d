//! InMemory Message Repository 実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConversationId, DirectMessage, MessageRepository};

/// インメモリ Message Repository 実装（会話ごとに追加順で保持）
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: Mutex<HashMap<ConversationId, Vec<DirectMessage>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn append(&self, message: DirectMessage) {
        let mut messages = self.messages.lock().await;
        messages
            .entry(message.conversation_id.clone())
            .or_default()
            .push(message);
    }

    async fn list_by_conversation(&self, id: &ConversationId) -> Vec<DirectMessage> {
        let messages = self.messages.lock().await;
        messages.get(id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ConversationIdFactory, MessageIdFactory, MessageText, Timestamp, UserId,
    };

    fn message(conversation_id: &ConversationId, text: &str, at: i64) -> DirectMessage {
        DirectMessage::new(
            MessageIdFactory::generate(),
            conversation_id.clone(),
            UserId::new("alice".to_string()).unwrap(),
            MessageText::new(text.to_string()).unwrap(),
            Timestamp::new(at),
        )
    }

    #[tokio::test]
    async fn test_append_keeps_order_per_conversation() {
        // テスト項目: 会話ごとに追加順でメッセージが返される
        // given (前提条件):
        let repo = InMemoryMessageRepository::new();
        let conv1 = ConversationIdFactory::generate();
        let conv2 = ConversationIdFactory::generate();

        // when (操作):
        repo.append(message(&conv1, "first", 1)).await;
        repo.append(message(&conv2, "other", 2)).await;
        repo.append(message(&conv1, "second", 3)).await;

        // then (期待する結果):
        let texts: Vec<String> = repo
            .list_by_conversation(&conv1)
            .await
            .into_iter()
            .map(|m| m.text.into_string())
            .collect();
        assert_eq!(texts, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn test_list_unknown_conversation_is_empty() {
        // テスト項目: メッセージのない会話は空のリスト
        let repo = InMemoryMessageRepository::new();
        let messages = repo
            .list_by_conversation(&ConversationIdFactory::generate())
            .await;
        assert!(messages.is_empty());
    }
}
