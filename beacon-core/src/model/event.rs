use crate::model::chat::ChatMessage;
use crate::model::connection::ConnectionId;
use crate::model::member::Member;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};

/// Events a client may send over the socket.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Subscribe to a text room, replacing any previous subscription.
    JoinTextRoom { room: RoomId },

    /// Relay a chat message to the room's text subscribers.
    SendChat(ChatMessage),

    /// Enter a voice room. Identity is trusted as given; the auth
    /// collaborator verified it before the socket was opened.
    JoinVoice {
        room: RoomId,
        identity: String,
        signaling_address: String,
    },

    /// Leave the current voice room, if any.
    LeaveVoice,
}

/// Events the server sends to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", content = "d", rename_all = "snake_case")]
pub enum ServerEvent {
    /// First event on every connection, carrying the assigned id.
    Welcome { connection_id: ConnectionId },

    /// A chat message relayed to text-room subscribers.
    ChatReceived(ChatMessage),

    /// Full roster of one voice room, broadcast to every connected client.
    /// Recipients filter by the room they are displaying.
    VoiceRosterUpdate { room: RoomId, members: Vec<Member> },

    /// A new peer joined the recipient's voice room; the recipient is
    /// expected to initiate the media handshake toward this address.
    PeerAnnounce { signaling_address: String },
}
