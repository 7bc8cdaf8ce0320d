//! InMemory Presence Repository 実装
//!
//! 接続中のクライアント（WebSocket sender）と PresenceRegistry を
//! 1 つの Mutex でまとめて保護します。登録・解除・検索はロックを保持したまま
//! 完了し、オンライン一覧のブロードキャストもロック内で送出するため、
//! 各クライアントは変更順に最新の一覧を受け取ります。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::{
    domain::{
        ConnectionId, PresenceEntry, PresenceRegistry, PresenceRepository, RegisterOutcome,
        Timestamp, UserId,
    },
    infrastructure::dto::websocket::OnlineUsersMessage,
};

/// Client connection information
pub struct ClientInfo {
    /// Message sender channel
    pub sender: UnboundedSender<String>,
    /// Unix timestamp when connected (milliseconds)
    pub connected_at: Timestamp,
}

#[derive(Default)]
struct PresenceState {
    /// Every attached connection, registered or not
    connections: HashMap<ConnectionId, ClientInfo>,
    registry: PresenceRegistry,
}

impl PresenceState {
    /// Push the current online list to every attached connection.
    fn broadcast_online_users(&self) {
        let message = OnlineUsersMessage::from_entries(self.registry.entries());
        let payload = match serde_json::to_string(&message) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to encode online-users: {}", e);
                return;
            }
        };

        for (connection_id, client_info) in &self.connections {
            if client_info.sender.send(payload.clone()).is_err() {
                tracing::warn!("Failed to send online-users to connection '{}'", connection_id);
            }
        }
        tracing::debug!(
            "Broadcasted online-users ({} users) to {} connections",
            self.registry.len(),
            self.connections.len()
        );
    }
}

/// インメモリ Presence Repository 実装
///
/// ドメイン層の PresenceRepository trait を実装します（依存性の逆転）。
#[derive(Default)]
pub struct InMemoryPresenceRepository {
    state: Mutex<PresenceState>,
}

impl InMemoryPresenceRepository {
    /// 新しい InMemoryPresenceRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PresenceRepository for InMemoryPresenceRepository {
    async fn attach(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) {
        let mut state = self.state.lock().await;
        state.connections.insert(
            connection_id,
            ClientInfo {
                sender,
                connected_at,
            },
        );
    }

    async fn register(&self, user_id: UserId, connection_id: ConnectionId) -> RegisterOutcome {
        let mut state = self.state.lock().await;
        let outcome = state.registry.register(user_id, connection_id);
        state.broadcast_online_users();
        outcome
    }

    async fn detach(&self, connection_id: &ConnectionId) -> Option<PresenceEntry> {
        let mut state = self.state.lock().await;
        state.connections.remove(connection_id);
        let removed = state.registry.unregister(connection_id);
        state.broadcast_online_users();
        removed
    }

    async fn lookup(&self, user_id: &UserId) -> Option<ConnectionId> {
        let state = self.state.lock().await;
        state.registry.lookup(user_id).cloned()
    }

    async fn connected_at(&self, connection_id: &ConnectionId) -> Option<Timestamp> {
        let state = self.state.lock().await;
        state
            .connections
            .get(connection_id)
            .map(|client_info| client_info.connected_at)
    }

    async fn deliver(&self, connection_id: &ConnectionId, payload: String) -> bool {
        let state = self.state.lock().await;
        match state.connections.get(connection_id) {
            Some(client_info) => client_info.sender.send(payload).is_ok(),
            None => false,
        }
    }

    async fn online_users(&self) -> Vec<PresenceEntry> {
        let state = self.state.lock().await;
        state.registry.entries().to_vec()
    }

    async fn count_connections(&self) -> usize {
        let state = self.state.lock().await;
        state.connections.len()
    }
}
