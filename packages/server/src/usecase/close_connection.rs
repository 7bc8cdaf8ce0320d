//! UseCase: 接続切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CloseConnectionUseCase::execute() メソッド
//! - 切断時のプレゼンス解除と、残りの接続へのオンライン一覧ブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みユーザーの切断
//! - エッジケース：未登録のまま切断（エントリなし、ブロードキャストのみ）

use std::sync::Arc;

use crate::domain::{ConnectionId, PresenceEntry, PresenceRepository, Timestamp};

/// 接続切断のユースケース
pub struct CloseConnectionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl CloseConnectionUseCase {
    /// 新しい CloseConnectionUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Some(PresenceEntry)` - 解除されたプレゼンス
    /// * `None` - この接続はユーザー登録されていなかった
    pub async fn execute(&self, connection_id: &ConnectionId) -> Option<PresenceEntry> {
        let connected_at = self.repository.connected_at(connection_id).await;
        let removed = self.repository.detach(connection_id).await;
        let duration_ms = connected_at
            .map(|at| Timestamp::now().value() - at.value())
            .unwrap_or_default();

        match &removed {
            Some(entry) => tracing::info!(
                "User '{}' went offline (connection '{}', connected for {} ms)",
                entry.user_id,
                connection_id,
                duration_ms
            ),
            None => tracing::debug!(
                "Connection '{}' closed without a registered user (connected for {} ms)",
                connection_id,
                duration_ms
            ),
        }

        removed
    }

    /// 残りの接続数を取得
    pub async fn count_remaining_connections(&self) -> usize {
        self.repository.count_connections().await
    }
}
