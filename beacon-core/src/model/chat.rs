use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};

/// An ephemeral chat message. Passes through the relay unchanged and is
/// never stored server-side. `timestamp` is client-supplied milliseconds,
/// relayed untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub room: RoomId,
    pub author: String,
    pub text: String,
    pub timestamp: i64,
}
