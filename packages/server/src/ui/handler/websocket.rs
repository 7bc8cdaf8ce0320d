//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessageText, UserId},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::{
        CloseConnectionUseCase, OpenConnectionUseCase, RegisterPresenceUseCase,
        RelayMessageUseCase, RelayOutcome,
    },
};

/// Query parameters for WebSocket connection
#[derive(Debug, Default, Deserialize)]
pub struct ConnectQuery {
    /// Register this user as soon as the socket opens
    pub user_id: Option<String>,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, query.user_id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, user_id: Option<String>) {
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive messages
    let (tx, mut rx) = mpsc::unbounded_channel();
    let connection_id = OpenConnectionUseCase::new(state.presence.clone())
        .execute(tx)
        .await;
    tracing::info!("Connection '{}' opened", connection_id);

    if let Some(user_id) = user_id {
        register(&state, &connection_id, user_id).await;
    }

    let connection_id_clone = connection_id.clone();
    let state_clone = state.clone();

    // Spawn a task to receive events from this connection
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text on '{}': {}", connection_id_clone, text.as_str());
                    match serde_json::from_str::<ClientEvent>(text.as_str()) {
                        Ok(event) => {
                            handle_client_event(&state_clone, &connection_id_clone, event).await
                        }
                        Err(e) => tracing::warn!(
                            "Ignoring malformed frame on '{}': {}",
                            connection_id_clone,
                            e
                        ),
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id_clone);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to forward queued messages to this connection
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let close_usecase = CloseConnectionUseCase::new(state.presence.clone());
    close_usecase.execute(&connection_id).await;
    tracing::info!(
        "Connection '{}' closed ({} remaining)",
        connection_id,
        close_usecase.count_remaining_connections().await
    );
}

async fn handle_client_event(state: &AppState, connection_id: &ConnectionId, event: ClientEvent) {
    match event {
        ClientEvent::Register { user_id } => register(state, connection_id, user_id).await,
        ClientEvent::SendMessage {
            sender_id,
            receiver_id,
            text,
        } => {
            let (sender_id, receiver_id, text) = match (
                UserId::new(sender_id),
                UserId::new(receiver_id),
                MessageText::new(text),
            ) {
                (Ok(s), Ok(r), Ok(t)) => (s, r, t),
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    tracing::warn!("Ignoring send-message on '{}': {}", connection_id, e);
                    return;
                }
            };

            let usecase = RelayMessageUseCase::new(state.presence.clone());
            match usecase.execute(sender_id, receiver_id, text).await {
                RelayOutcome::Delivered(target) => {
                    tracing::debug!("Relayed message to connection '{}'", target)
                }
                RelayOutcome::Dropped => tracing::debug!("Receiver offline; message dropped"),
            }
        }
    }
}

async fn register(state: &AppState, connection_id: &ConnectionId, user_id: String) {
    match UserId::new(user_id) {
        Ok(user_id) => {
            RegisterPresenceUseCase::new(state.presence.clone())
                .execute(user_id, connection_id.clone())
                .await;
        }
        Err(e) => tracing::warn!("Ignoring register on '{}': {}", connection_id, e),
    }
}
