//! UseCase: 会話（スレッド）の作成・一覧

use std::sync::Arc;

use crate::domain::{
    Conversation, ConversationIdFactory, ConversationRepository, ProfileRepository, Timestamp,
    UserId,
};

use super::error::ConversationError;

/// 会話の find-or-create ユースケース
pub struct FindOrCreateConversationUseCase {
    repository: Arc<dyn ConversationRepository>,
}

impl FindOrCreateConversationUseCase {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    /// 呼び出し元と `receiver` の会話を返す（なければ作成する）
    ///
    /// # Errors
    ///
    /// * `ConversationError::SelfConversation` - 自分自身との会話
    pub async fn execute(
        &self,
        caller: UserId,
        receiver: UserId,
    ) -> Result<Conversation, ConversationError> {
        if caller == receiver {
            return Err(ConversationError::SelfConversation);
        }

        let candidate = Conversation::new(
            ConversationIdFactory::generate(),
            caller,
            receiver,
            Timestamp::now(),
        );
        Ok(self.repository.find_or_insert(candidate).await)
    }
}

/// 一覧表示用の会話情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSummary {
    pub conversation: Conversation,
    pub recipient_id: UserId,
    /// 相手のプロフィール名（プロフィールがなければ空文字）
    pub recipient_name: String,
}

/// 会話一覧のユースケース
pub struct ListConversationsUseCase {
    conversations: Arc<dyn ConversationRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl ListConversationsUseCase {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            conversations,
            profiles,
        }
    }

    /// 呼び出し元が参加している会話を、最新のやり取り順に返す
    pub async fn execute(&self, caller: &UserId) -> Vec<ConversationSummary> {
        let mut summaries = Vec::new();
        for conversation in self.conversations.list_for_user(caller).await {
            let Some(recipient_id) = conversation.counterpart(caller).cloned() else {
                continue;
            };
            let recipient_name = self
                .profiles
                .find(&recipient_id)
                .await
                .map(|p| p.name)
                .unwrap_or_default();
            summaries.push(ConversationSummary {
                conversation,
                recipient_id,
                recipient_name,
            });
        }
        summaries
    }
}
