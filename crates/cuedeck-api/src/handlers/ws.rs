//! WebSocket upgrade handler for the live viewer channel.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use cuedeck_realtime::ConnectionHandle;

use crate::dto::response::ConnectionsResponse;
use crate::state::AppState;

/// GET /api/connections — current live viewer count.
pub async fn connection_count(
    State(state): State<AppState>,
) -> axum::Json<ConnectionsResponse> {
    axum::Json(ConnectionsResponse {
        connections: state.registry.count(),
    })
}

/// GET /ws/live — WebSocket upgrade. Viewers need no credential to listen.
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_ws_connection(state, socket))
}

/// Drives one established viewer connection.
///
/// The receive loop's only job is to detect disconnect; inbound frames are
/// treated as keep-alives and otherwise ignored. Termination — clean close
/// or transport error — always unregisters the connection.
async fn handle_ws_connection(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (tx, mut outbound_rx) = mpsc::channel(state.config.realtime.channel_buffer_size);
    let handle = Arc::new(ConnectionHandle::new(tx));
    let conn_id = handle.id;

    state.registry.register(handle);

    // Forward queued broadcast payloads to the socket, in order.
    let outbound_task = tokio::spawn(async move {
        while let Some(payload) = outbound_rx.recv().await {
            if ws_tx.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Close(_)) => {
                debug!(conn_id = %conn_id, "Viewer sent close frame");
                break;
            }
            // Text/binary/ping/pong frames all just keep the connection open.
            Ok(_) => {}
            Err(e) => {
                warn!(conn_id = %conn_id, error = %e, "WebSocket transport error");
                break;
            }
        }
    }

    outbound_task.abort();
    state.registry.unregister(&conn_id);

    info!(conn_id = %conn_id, "Viewer connection closed");
}
