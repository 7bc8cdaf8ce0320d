//! Shared helpers for integration tests.
//!
//! Each test starts its own server in-process on an ephemeral port, so tests
//! can run in parallel without sharing presence state.

#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use roomie_server::ui::state::AppState;
use tokio::{net::TcpListener, sync::oneshot};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// How long to wait for a frame before treating it as "nothing arrived"
pub const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// In-process test server, shut down on drop
pub struct TestServer {
    port: u16,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener.local_addr().expect("No local addr").port();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let state = Arc::new(AppState::new_in_memory());
        tokio::spawn(async move {
            roomie_server::ui::serve(listener, state, async {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("Test server failed");
        });

        Self {
            port,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }

    /// Open a WebSocket, optionally registering `user_id` on connect
    pub async fn connect(&self, user_id: Option<&str>) -> WsStream {
        let url = match user_id {
            Some(id) => format!("{}?user_id={}", self.ws_url(), id),
            None => self.ws_url(),
        };
        let (stream, _) = connect_async(url).await.expect("Failed to connect");
        stream
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Send a JSON value as a text frame
pub async fn send_json(ws: &mut WsStream, value: serde_json::Value) {
    ws.send(Message::Text(value.to_string().into()))
        .await
        .expect("Failed to send frame");
}

/// Next JSON text frame, or `None` if nothing arrives within `RECV_TIMEOUT`
pub async fn next_json(ws: &mut WsStream) -> Option<serde_json::Value> {
    loop {
        let frame = tokio::time::timeout(RECV_TIMEOUT, ws.next()).await.ok()??;
        match frame.ok()? {
            Message::Text(text) => return serde_json::from_str(text.as_str()).ok(),
            Message::Close(_) => return None,
            _ => continue,
        }
    }
}

/// Read frames until one has the given `type`, skipping others
pub async fn next_of_type(ws: &mut WsStream, kind: &str) -> Option<serde_json::Value> {
    loop {
        let value = next_json(ws).await?;
        if value["type"] == kind {
            return Some(value);
        }
    }
}

/// Read `online-users` frames until one satisfies `pred`
pub async fn wait_online_users<F>(ws: &mut WsStream, pred: F) -> Option<serde_json::Value>
where
    F: Fn(&[serde_json::Value]) -> bool,
{
    loop {
        let value = next_of_type(ws, "online-users").await?;
        if pred(value["users"].as_array()?.as_slice()) {
            return Some(value);
        }
    }
}

/// User ids of an `online-users` frame, in order
pub fn user_ids(value: &serde_json::Value) -> Vec<String> {
    value["users"]
        .as_array()
        .map(|users| {
            users
                .iter()
                .filter_map(|u| u["user_id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
