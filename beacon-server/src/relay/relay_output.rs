use async_trait::async_trait;
use beacon_core::{ConnectionId, ServerEvent};

/// Trait the external transport (WebSocket gateway) must implement so the
/// relay can deliver events to clients.
#[async_trait]
pub trait RelayOutput: Send + Sync {
    /// Deliver an event to a single connection.
    async fn send(&self, connection_id: ConnectionId, event: ServerEvent);

    /// Deliver an event to every connected client.
    async fn broadcast(&self, event: ServerEvent);
}
