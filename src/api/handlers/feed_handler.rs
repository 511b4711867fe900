//! Content change feed over WebSocket.
//!
//! Streams JSON-encoded [`FeedEvent`]s to each subscriber. A client
//! that falls behind sees a `lagged` notice and should refetch the
//! collection, then resume applying events by sequence number.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use tokio::sync::broadcast::error::RecvError;

use crate::api::AppState;

/// Create feed routes
pub fn feed_routes() -> Router<AppState> {
    Router::new().route("/contents", get(content_feed))
}

/// Upgrade to a WebSocket carrying content change events
pub async fn content_feed(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_events(socket, state))
}

async fn stream_events(mut socket: WebSocket, state: AppState) {
    let mut rx = state.feed.subscribe();

    loop {
        match rx.recv().await {
            Ok(event) => {
                let Ok(text) = serde_json::to_string(&event) else {
                    continue;
                };
                if socket.send(Message::Text(text)).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Feed subscriber lagged");
                let notice = serde_json::json!({ "type": "lagged", "skipped": skipped });
                if socket.send(Message::Text(notice.to_string())).await.is_err() {
                    break;
                }
            }
            Err(RecvError::Closed) => break,
        }
    }
}
