mod chat;
mod connection;
mod event;
mod member;
mod room;

pub use chat::ChatMessage;
pub use connection::ConnectionId;
pub use event::{ClientEvent, ServerEvent};
pub use member::Member;
pub use room::RoomId;
