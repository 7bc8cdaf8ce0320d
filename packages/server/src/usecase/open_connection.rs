//! UseCase: 接続受付処理
//!
//! WebSocket を受け付けた時点で接続 ID を払い出し、ブロードキャスト対象として
//! Repository に登録します。この時点ではまだユーザーとは紐付きません。

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::{ConnectionId, ConnectionIdFactory, PresenceRepository, Timestamp};

/// 接続受付のユースケース
pub struct OpenConnectionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl OpenConnectionUseCase {
    /// 新しい OpenConnectionUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// 接続を受け付ける
    ///
    /// # Arguments
    ///
    /// * `sender` - この接続へのメッセージ送信チャンネル
    ///
    /// # Returns
    ///
    /// 払い出した接続 ID
    pub async fn execute(&self, sender: UnboundedSender<String>) -> ConnectionId {
        let connection_id = ConnectionIdFactory::generate();
        self.repository
            .attach(connection_id.clone(), sender, Timestamp::now())
            .await;
        connection_id
    }
}
