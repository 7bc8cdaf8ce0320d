//! UseCase: ユーザー登録（プレゼンス）処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - RegisterPresenceUseCase::execute() メソッド
//! - 既存エントリ優先の登録と、登録後のオンライン一覧ブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規ユーザーの登録
//! - エッジケース：同じユーザーが別の接続から登録（既存の接続が維持される）

use std::sync::Arc;

use crate::domain::{ConnectionId, PresenceRepository, RegisterOutcome, UserId};

/// ユーザー登録のユースケース
pub struct RegisterPresenceUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn PresenceRepository>,
}

impl RegisterPresenceUseCase {
    /// 新しい RegisterPresenceUseCase を作成
    pub fn new(repository: Arc<dyn PresenceRepository>) -> Self {
        Self { repository }
    }

    /// ユーザーを接続に紐付ける
    ///
    /// 登録済みユーザーの再登録はエラーではなく何もしない。いずれの場合も
    /// Repository が全接続へ最新のオンライン一覧を送る。
    pub async fn execute(&self, user_id: UserId, connection_id: ConnectionId) -> RegisterOutcome {
        let user = user_id.to_string();
        let outcome = self.repository.register(user_id, connection_id.clone()).await;

        match outcome {
            RegisterOutcome::Registered => {
                tracing::info!("User '{}' registered on connection '{}'", user, connection_id);
            }
            RegisterOutcome::AlreadyRegistered => {
                tracing::info!(
                    "User '{}' is already online; keeping the existing connection (ignored '{}')",
                    user,
                    connection_id
                );
            }
            RegisterOutcome::ConnectionInUse => {
                tracing::warn!(
                    "Connection '{}' already carries another user; ignoring registration of '{}'",
                    connection_id,
                    user
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ConnectionIdFactory, Timestamp},
        infrastructure::repository::InMemoryPresenceRepository,
    };
    use tokio::sync::mpsc;

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_register_new_user() {
        // テスト項目: 新規ユーザーが登録され、検索できる
        // given (前提条件):
        let repository = Arc::new(InMemoryPresenceRepository::new());
        let usecase = RegisterPresenceUseCase::new(repository.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = ConnectionIdFactory::generate();
        repository.attach(conn.clone(), tx, Timestamp::new(0)).await;

        // when (操作):
        let outcome = usecase.execute(user("alice"), conn.clone()).await;

        // then (期待する結果):
        assert_eq!(outcome, RegisterOutcome::Registered);
        assert_eq!(repository.lookup(&user("alice")).await, Some(conn));
        // 自分自身にもオンライン一覧が届く
        let msg: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(msg["type"], "online-users");
    }

    #[tokio::test]
    async fn test_register_same_user_keeps_first_connection() {
        // テスト項目: 別接続からの再登録では既存の接続 ID が変わらない
        // given (前提条件):
        let repository = Arc::new(InMemoryPresenceRepository::new());
        let usecase = RegisterPresenceUseCase::new(repository.clone());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        let first = ConnectionIdFactory::generate();
        let second = ConnectionIdFactory::generate();
        repository.attach(first.clone(), tx1, Timestamp::new(0)).await;
        repository.attach(second.clone(), tx2, Timestamp::new(0)).await;
        usecase.execute(user("bob"), first.clone()).await;

        // when (操作):
        let outcome = usecase.execute(user("bob"), second).await;

        // then (期待する結果):
        assert_eq!(outcome, RegisterOutcome::AlreadyRegistered);
        assert_eq!(repository.lookup(&user("bob")).await, Some(first.clone()));

        // 2 つ目の接続にも（変化のない）一覧がブロードキャストされる
        let mut last = None;
        while let Ok(msg) = rx2.try_recv() {
            last = Some(msg);
        }
        let last: serde_json::Value = serde_json::from_str(&last.unwrap()).unwrap();
        assert_eq!(last["users"][0]["connection_id"], first.as_str());
    }
}
