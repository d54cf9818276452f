use beacon_core::{ChatMessage, ConnectionId, RoomId};

/// Commands entering the relay actor from the gateway (WebSocket).
#[derive(Debug)]
pub enum RelayCommand {
    /// A new WebSocket connection was accepted.
    Connect { connection_id: ConnectionId },

    /// Subscribe the connection to a text room, replacing any previous one.
    JoinTextRoom {
        connection_id: ConnectionId,
        room: RoomId,
    },

    /// Fan a chat message out to the room's text subscribers.
    SendChat {
        connection_id: ConnectionId,
        message: ChatMessage,
    },

    /// Enter a voice room, implicitly leaving the previous one.
    JoinVoice {
        connection_id: ConnectionId,
        room: RoomId,
        identity: String,
        signaling_address: String,
    },

    /// Leave the current voice room, if any.
    LeaveVoice { connection_id: ConnectionId },

    /// Signal that the WebSocket connection went away.
    Disconnect { connection_id: ConnectionId },
}
