use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};

/// One entry in a voice room's roster.
///
/// `signaling_address` comes from the client's media layer and is relayed
/// as an uninterpreted token; the server never parses it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub identity: String,
    pub signaling_address: String,
    pub connection_id: ConnectionId,
}
