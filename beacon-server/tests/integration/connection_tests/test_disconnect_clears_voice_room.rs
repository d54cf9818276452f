use beacon_core::RoomId;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_client, disconnect, join_voice, recv_roster};

/// A drops its transport abruptly while in a voice room with B present.
/// B's next roster for that room must no longer list A.
#[tokio::test]
async fn test_disconnect_clears_voice_room() {
    init_tracing();

    let (cmd_tx, mut event_rx, _output) = create_test_relay();
    let lobby = RoomId::from("Lobby");

    let a = connect_client(&cmd_tx, &mut event_rx).await;
    let b = connect_client(&cmd_tx, &mut event_rx).await;

    join_voice(&cmd_tx, &a, "Lobby", "ann", "peer-a").await;
    let roster = recv_roster(&mut event_rx, &lobby).await;
    assert_eq!(roster.len(), 1);

    join_voice(&cmd_tx, &b, "Lobby", "bob", "peer-b").await;
    let roster = recv_roster(&mut event_rx, &lobby).await;
    assert_eq!(roster.len(), 2);

    disconnect(&cmd_tx, &a).await;

    let roster = recv_roster(&mut event_rx, &lobby).await;
    assert_eq!(roster.len(), 1);
    assert!(roster.iter().all(|m| m.connection_id != a));
    assert_eq!(roster[0].identity, "bob");
}
