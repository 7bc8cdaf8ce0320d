//! UseCase: メッセージの保存・取得
//!
//! リアルタイム中継とは独立した永続化側の処理。オフラインの受信者は
//! 次回の取得時にここで保存されたメッセージを読む。

use std::sync::Arc;

use crate::domain::{
    Conversation, ConversationId, ConversationRepository, DirectMessage, MessageIdFactory,
    MessageRepository, MessageText, Timestamp, UserId,
};

use super::error::MessageError;

/// 参加者であることを確認して会話を取得
async fn participant_conversation(
    conversations: &dyn ConversationRepository,
    id: &ConversationId,
    caller: &UserId,
) -> Result<Conversation, MessageError> {
    let conversation = conversations
        .find_by_id(id)
        .await
        .map_err(|_| MessageError::ConversationNotFound(id.to_string()))?;
    if !conversation.involves(caller) {
        return Err(MessageError::NotParticipant(id.to_string()));
    }
    Ok(conversation)
}

/// メッセージ保存のユースケース
pub struct PostMessageUseCase {
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl PostMessageUseCase {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    /// メッセージを保存し、会話の最新メッセージを更新する
    ///
    /// # Errors
    ///
    /// * `MessageError::ConversationNotFound` - 会話が存在しない
    /// * `MessageError::NotParticipant` - 呼び出し元が参加者でない
    /// * `MessageError::Storage` - 会話の最新メッセージを更新できなかった
    pub async fn execute(
        &self,
        caller: UserId,
        conversation_id: ConversationId,
        text: MessageText,
    ) -> Result<DirectMessage, MessageError> {
        participant_conversation(self.conversations.as_ref(), &conversation_id, &caller).await?;

        let now = Timestamp::now();
        let message = DirectMessage::new(
            MessageIdFactory::generate(),
            conversation_id.clone(),
            caller,
            text.clone(),
            now,
        );
        self.messages.append(message.clone()).await;
        self.conversations
            .record_last_message(&conversation_id, &text, now)
            .await
            .map_err(|e| MessageError::Storage(e.to_string()))?;

        Ok(message)
    }
}

/// メッセージ一覧のユースケース
pub struct ListMessagesUseCase {
    conversations: Arc<dyn ConversationRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl ListMessagesUseCase {
    pub fn new(
        conversations: Arc<dyn ConversationRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    /// 会話のメッセージを保存順に返す
    pub async fn execute(
        &self,
        caller: &UserId,
        conversation_id: &ConversationId,
    ) -> Result<Vec<DirectMessage>, MessageError> {
        participant_conversation(self.conversations.as_ref(), conversation_id, caller).await?;
        Ok(self.messages.list_by_conversation(conversation_id).await)
    }
}
