use crate::relay::{RelayCommand, RelayOutput};
use async_trait::async_trait;
use axum::extract::ws::Message;
use beacon_core::{ConnectionId, ServerEvent};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

struct GatewayInner {
    connections: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
}

/// Tracks the outbound half of every live WebSocket so the relay can
/// deliver events to one connection or to all of them.
#[derive(Clone)]
pub struct GatewayService {
    inner: Arc<GatewayInner>,
    pub(crate) relay_cmd_tx: mpsc::Sender<RelayCommand>,
}

impl GatewayService {
    pub fn new(relay_cmd_tx: mpsc::Sender<RelayCommand>) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                connections: DashMap::new(),
            }),
            relay_cmd_tx,
        }
    }

    pub fn add_connection(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.connections.insert(connection_id, tx);
    }

    pub fn remove_connection(&self, connection_id: &ConnectionId) {
        self.inner.connections.remove(connection_id);
    }

    fn send_json(&self, connection_id: &ConnectionId, json: String) {
        if let Some(conn) = self.inner.connections.get(connection_id) {
            if let Err(e) = conn.send(Message::Text(json.into())) {
                error!("Failed to send WS message to {}: {:?}", connection_id, e);
            }
        } else {
            warn!(
                "Attempted to send event to disconnected client {}",
                connection_id
            );
        }
    }
}

#[async_trait]
impl RelayOutput for GatewayService {
    async fn send(&self, connection_id: ConnectionId, event: ServerEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => self.send_json(&connection_id, json),
            Err(e) => error!("Failed to serialize server event: {}", e),
        }
    }

    async fn broadcast(&self, event: ServerEvent) {
        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize server event: {}", e);
                return;
            }
        };

        // Collect the senders first so the map guard is not held while
        // pushing frames.
        let targets: Vec<mpsc::UnboundedSender<Message>> = self
            .inner
            .connections
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        for tx in targets {
            let _ = tx.send(Message::Text(json.clone().into()));
        }
    }
}
