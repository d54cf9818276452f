use crate::gateway::GatewayService;
use crate::relay::RelayCommand;
use crate::state::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use beacon_core::{ClientEvent, ConnectionId};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let connection_id = ConnectionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, connection_id, state.gateway))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, service: GatewayService) {
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    service.add_connection(connection_id.clone(), tx);

    if service
        .relay_cmd_tx
        .send(RelayCommand::Connect {
            connection_id: connection_id.clone(),
        })
        .await
        .is_err()
    {
        error!("Relay died; dropping connection {}", connection_id);
        service.remove_connection(&connection_id);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();
        let connection_id = connection_id.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => {
                            let cmd = command_for(connection_id.clone(), event);
                            if let Err(e) = service.relay_cmd_tx.send(cmd).await {
                                error!("Relay died: {}", e);
                                break;
                            }
                        }
                        // Malformed payloads are dropped, never answered.
                        Err(e) => warn!("Invalid client event from {}: {:?}", connection_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Whichever half ended first, the transport is gone; the relay treats
    // this exactly like an explicit leave.
    let _ = service
        .relay_cmd_tx
        .send(RelayCommand::Disconnect {
            connection_id: connection_id.clone(),
        })
        .await;

    service.remove_connection(&connection_id);
    info!("WebSocket disconnected: {}", connection_id);
}

/// Map a parsed client event onto the relay's command surface.
fn command_for(connection_id: ConnectionId, event: ClientEvent) -> RelayCommand {
    match event {
        ClientEvent::JoinTextRoom { room } => RelayCommand::JoinTextRoom {
            connection_id,
            room,
        },
        ClientEvent::SendChat(message) => RelayCommand::SendChat {
            connection_id,
            message,
        },
        ClientEvent::JoinVoice {
            room,
            identity,
            signaling_address,
        } => RelayCommand::JoinVoice {
            connection_id,
            room,
            identity,
            signaling_address,
        },
        ClientEvent::LeaveVoice => RelayCommand::LeaveVoice { connection_id },
    }
}
