use beacon_core::{ConnectionId, ServerEvent};
use beacon_server::RelayCommand;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_client, disconnect, recv_event};

/// Disconnecting a client that never joined a voice room must not emit a
/// roster broadcast.
#[tokio::test]
async fn test_disconnect_without_voice_room_is_silent() {
    init_tracing();

    let (cmd_tx, mut event_rx, _output) = create_test_relay();

    let a = connect_client(&cmd_tx, &mut event_rx).await;
    disconnect(&cmd_tx, &a).await;

    // The very next event must be this probe's welcome; a roster broadcast
    // in between would mean the disconnect produced output.
    let b = ConnectionId::new();
    cmd_tx
        .send(RelayCommand::Connect {
            connection_id: b.clone(),
        })
        .await
        .expect("relay not running");

    let out = recv_event(&mut event_rx).await;
    match out.event {
        ServerEvent::Welcome { connection_id } => assert_eq!(connection_id, b),
        other => panic!("unexpected event after silent disconnect: {:?}", other),
    }
}
