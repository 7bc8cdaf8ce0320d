//! UseCase: リアルタイムメッセージ中継処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RelayMessageUseCase::execute() メソッド
//! - 受信者がオンラインなら、その接続にだけ message-received を 1 回送る
//! - オフラインなら何も送らず、エラーにもしない
//!
//! ### なぜこのテストが必要か
//! - 中継はベストエフォートの通知であり、永続化は別の HTTP API が担う
//! - 「届いた」「破棄された」の 2 通りだけを返すことを保証する
//!
//! ### どのような状況を想定しているか
//! - 正常系：オンラインの受信者への中継
//! - エッジケース：未登録の受信者、切断後の受信者

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, MessageText, PresenceRepository, UserId},
    infrastructure::dto::websocket::MessageReceivedMessage,
};

/// 中継の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// 受信者の接続へ送出した（到達確認はしない）
    Delivered(ConnectionId),
    /// 受信者がオフラインのため破棄した
    Dropped,
}

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl RelayMessageUseCase {
    /// 新しい RelayMessageUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// メッセージ中継を実行
    ///
    /// # Arguments
    ///
    /// * `sender_id` - 送信者のユーザー ID（検証しない）
    /// * `receiver_id` - 受信者のユーザー ID
    /// * `text` - 本文
    pub async fn execute(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        text: MessageText,
    ) -> RelayOutcome {
        let Some(connection_id) = self.repository.lookup(&receiver_id).await else {
            tracing::debug!(
                "Receiver '{}' is offline; dropping message from '{}'",
                receiver_id,
                sender_id
            );
            return RelayOutcome::Dropped;
        };

        let message = MessageReceivedMessage::new(sender_id.into_string(), text.into_string());
        let payload = match serde_json::to_string(&message) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to encode message-received: {}", e);
                return RelayOutcome::Dropped;
            }
        };

        if !self.repository.deliver(&connection_id, payload).await {
            // Closed between lookup and send; the persisted copy is authoritative.
            tracing::warn!(
                "Connection '{}' for '{}' closed before delivery",
                connection_id,
                receiver_id
            );
        }

        RelayOutcome::Delivered(connection_id)
    }
}
