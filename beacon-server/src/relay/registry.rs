use beacon_core::{ConnectionId, RoomId};
use std::collections::HashMap;

/// Per-connection state, alive for the duration of the transport session.
///
/// Text and voice rooms are independent namespaces: a connection has one
/// active text subscription and at most one voice membership, tracked
/// separately.
#[derive(Debug, Default)]
pub struct ConnectionState {
    pub identity: Option<String>,
    pub text_room: Option<RoomId>,
    pub voice_room: Option<RoomId>,
}

/// Maps live connections to their identity and room memberships.
/// Owns no persistent state; rebuilt from nothing on restart.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    connections: HashMap<ConnectionId, ConnectionState>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: HashMap::new(),
        }
    }

    /// Allocate a record with no identity and no rooms.
    pub fn connect(&mut self, connection_id: ConnectionId) {
        self.connections.entry(connection_id).or_default();
    }

    /// Discard a connection's record. Safe to call for an unknown id.
    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> Option<ConnectionState> {
        self.connections.remove(connection_id)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains_key(connection_id)
    }

    /// Replace the connection's text subscription. Unknown connections are
    /// ignored; the gateway only forwards events for registered sockets.
    pub fn set_text_room(&mut self, connection_id: &ConnectionId, room: RoomId) {
        if let Some(state) = self.connections.get_mut(connection_id) {
            state.text_room = Some(room);
        }
    }

    /// Record the connection's voice membership and the identity supplied
    /// alongside the join.
    pub fn set_voice_room(&mut self, connection_id: &ConnectionId, room: RoomId, identity: String) {
        if let Some(state) = self.connections.get_mut(connection_id) {
            state.voice_room = Some(room);
            state.identity = Some(identity);
        }
    }

    pub fn clear_voice_room(&mut self, connection_id: &ConnectionId) {
        if let Some(state) = self.connections.get_mut(connection_id) {
            state.voice_room = None;
        }
    }

    /// Connections currently subscribed to the given text room.
    pub fn text_subscribers(&self, room: &RoomId) -> Vec<ConnectionId> {
        self.connections
            .iter()
            .filter(|(_, state)| state.text_room.as_ref() == Some(room))
            .map(|(id, _)| id.clone())
            .collect()
    }
}
