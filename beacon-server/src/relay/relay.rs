use crate::relay::{ConnectionRegistry, RelayCommand, RelayOutput, RoomDirectory};
use beacon_core::{ChatMessage, ConnectionId, Member, RoomId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

/// The relay actor.
///
/// Owns the connection registry and the room directory and processes
/// gateway commands one at a time, so directory updates are serialized and
/// never partially visible: the broadcast step of each command always sees
/// the post-mutation state of that same command. The output side is
/// injected, which keeps the actor testable without a live transport.
pub struct Relay {
    registry: ConnectionRegistry,
    directory: RoomDirectory,
    command_rx: mpsc::Receiver<RelayCommand>,
    output: Arc<dyn RelayOutput>,
}

impl Relay {
    pub fn new(command_rx: mpsc::Receiver<RelayCommand>, output: Arc<dyn RelayOutput>) -> Self {
        Self {
            registry: ConnectionRegistry::new(),
            directory: RoomDirectory::new(),
            command_rx,
            output,
        }
    }

    /// Run the event loop until every command sender is dropped.
    /// Blocking (asynchronously); run via `tokio::spawn`.
    pub async fn run(mut self) {
        info!("Relay event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!("Relay event loop finished");
    }

    async fn handle_command(&mut self, cmd: RelayCommand) {
        match cmd {
            RelayCommand::Connect { connection_id } => {
                info!("Connection registered: {}", connection_id);

                self.registry.connect(connection_id.clone());
                self.output
                    .send(connection_id.clone(), ServerEvent::Welcome { connection_id })
                    .await;
            }

            RelayCommand::JoinTextRoom {
                connection_id,
                room,
            } => {
                self.registry.set_text_room(&connection_id, room);
            }

            RelayCommand::SendChat {
                connection_id,
                message,
            } => {
                self.fan_out_chat(connection_id, message).await;
            }

            RelayCommand::JoinVoice {
                connection_id,
                room,
                identity,
                signaling_address,
            } => {
                self.join_voice(connection_id, room, identity, signaling_address)
                    .await;
            }

            RelayCommand::LeaveVoice { connection_id } => {
                self.leave_voice(&connection_id).await;
            }

            RelayCommand::Disconnect { connection_id } => {
                info!("Connection dropped: {}", connection_id);

                // An abrupt disconnect is treated exactly like an explicit
                // leave, then the record is discarded.
                self.leave_voice(&connection_id).await;
                self.registry.disconnect(&connection_id);
            }
        }
    }

    /// Deliver a chat message to every subscriber of its text room except
    /// the sender, who already rendered the message locally.
    async fn fan_out_chat(&self, sender: ConnectionId, message: ChatMessage) {
        let recipients = self.registry.text_subscribers(&message.room);

        for connection_id in recipients {
            if connection_id == sender {
                continue;
            }
            self.output
                .send(connection_id, ServerEvent::ChatReceived(message.clone()))
                .await;
        }
    }

    async fn join_voice(
        &mut self,
        connection_id: ConnectionId,
        room: RoomId,
        identity: String,
        signaling_address: String,
    ) {
        // Switching channels is an implicit leave, never an error. Running
        // the full leave path first also means a connection can never be
        // double-counted across rooms, however fast joins arrive.
        self.leave_voice(&connection_id).await;

        // Members present before the newcomer are the ones who must
        // initiate a handshake toward it.
        let peers: Vec<ConnectionId> = self
            .directory
            .members(&room)
            .iter()
            .map(|m| m.connection_id.clone())
            .collect();

        let member = Member {
            identity: identity.clone(),
            signaling_address: signaling_address.clone(),
            connection_id: connection_id.clone(),
        };

        self.directory.insert(room.clone(), member);
        self.registry
            .set_voice_room(&connection_id, room.clone(), identity);

        info!("Connection {} joined voice room '{}'", connection_id, room);

        self.broadcast_roster(&room).await;

        for peer in peers {
            self.output
                .send(
                    peer,
                    ServerEvent::PeerAnnounce {
                        signaling_address: signaling_address.clone(),
                    },
                )
                .await;
        }
    }

    /// Remove the connection from its voice room, if any. Broadcasts the
    /// changed roster; leaving while in no room is a silent no-op. There is
    /// no "peer left" signaling event: survivors diff the roster instead.
    async fn leave_voice(&mut self, connection_id: &ConnectionId) {
        let Some((room, members)) = self.directory.remove(connection_id) else {
            return;
        };

        self.registry.clear_voice_room(connection_id);

        info!("Connection {} left voice room '{}'", connection_id, room);

        self.output
            .broadcast(ServerEvent::VoiceRosterUpdate { room, members })
            .await;
    }

    /// Roster snapshots go to every connected client, not just room
    /// members; recipients filter client-side. This trades bandwidth for a
    /// trivially consistent global view with no subscription bookkeeping.
    async fn broadcast_roster(&self, room: &RoomId) {
        let members = self.directory.members(room).to_vec();

        self.output
            .broadcast(ServerEvent::VoiceRosterUpdate {
                room: room.clone(),
                members,
            })
            .await;
    }
}
