use beacon_core::{ConnectionId, Member, RoomId};
use std::collections::HashMap;

/// Voice-room rosters, keyed by room.
///
/// A room exists exactly while it has members; once the last member is
/// removed the entry is dropped rather than kept around empty. Member
/// order is join order, and removal filters in place, so survivors keep
/// their positions.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: HashMap<RoomId, Vec<Member>>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
        }
    }

    /// Append a member to a room, creating the room on first join.
    ///
    /// Callers must have removed the connection from its previous room;
    /// the relay's join path does this unconditionally before inserting.
    pub fn insert(&mut self, room: RoomId, member: Member) {
        self.rooms.entry(room).or_default().push(member);
    }

    /// Remove a connection from whichever room contains it.
    ///
    /// Returns the room and its updated roster when a list actually
    /// changed, `None` when the connection was in no room.
    pub fn remove(&mut self, connection_id: &ConnectionId) -> Option<(RoomId, Vec<Member>)> {
        let room = self.rooms.iter().find_map(|(room, members)| {
            members
                .iter()
                .any(|m| &m.connection_id == connection_id)
                .then(|| room.clone())
        })?;

        let members = self.rooms.get_mut(&room)?;
        members.retain(|m| &m.connection_id != connection_id);
        let roster = members.clone();

        if roster.is_empty() {
            self.rooms.remove(&room);
        }

        Some((room, roster))
    }

    /// Current roster of a room; empty if the room does not exist.
    pub fn members(&self, room: &RoomId) -> &[Member] {
        self.rooms.get(room).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The room a connection currently occupies, if any.
    pub fn room_of(&self, connection_id: &ConnectionId) -> Option<&RoomId> {
        self.rooms.iter().find_map(|(room, members)| {
            members
                .iter()
                .any(|m| &m.connection_id == connection_id)
                .then_some(room)
        })
    }
}
