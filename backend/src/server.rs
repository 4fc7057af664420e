//! WebSocket endpoint and per-connection plumbing
//!
//! Each accepted socket gets a fresh connection id and an unbounded
//! outbound queue. One task pumps queued envelopes into the sink; the
//! read half forwards every text frame to the dispatcher. The game core
//! never sees the socket itself.

use crate::dispatcher::Event;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use futures::{SinkExt, StreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Clone)]
pub struct AppState {
    events: mpsc::UnboundedSender<Event>,
    next_conn_id: Arc<AtomicU64>,
}

pub fn router(events: mpsc::UnboundedSender<Event>) -> Router {
    let state = AppState {
        events,
        next_conn_id: Arc::new(AtomicU64::new(1)),
    };

    Router::new().route("/ws", get(ws_handler)).with_state(state)
}

async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(state, socket))
}

async fn handle_socket(state: AppState, socket: WebSocket) {
    let id = state.next_conn_id.fetch_add(1, Ordering::Relaxed);
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    if state.events.send(Event::Connected { id, tx }).is_err() {
        return;
    }

    let writer = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let text = match serde_json::to_string(&msg) {
                Ok(text) => text,
                Err(err) => {
                    debug!(conn = id, %err, "dropping unserializable envelope");
                    continue;
                }
            };
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(frame)) = stream.next().await {
        match frame {
            Message::Text(text) => {
                let _ = state.events.send(Event::Inbound {
                    id,
                    text: text.to_string(),
                });
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    let _ = state.events.send(Event::Closed { id });
    writer.abort();
}
