use beacon_core::RoomId;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_client, flush_relay, join_voice, leave_voice};

/// Leaving twice in a row is safe: the second leave changes nothing and
/// broadcasts nothing.
#[tokio::test]
async fn test_leave_voice_is_idempotent() {
    init_tracing();

    let (cmd_tx, mut event_rx, output) = create_test_relay();
    let lobby = RoomId::from("Lobby");

    let a = connect_client(&cmd_tx, &mut event_rx).await;

    join_voice(&cmd_tx, &a, "Lobby", "ann", "peer-a").await;
    leave_voice(&cmd_tx, &a).await;
    leave_voice(&cmd_tx, &a).await;
    flush_relay(&cmd_tx, &mut event_rx).await;

    // One roster for the join, one for the first leave, none for the second.
    let rosters = output.rosters_for(&lobby).await;
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].len(), 1);
    assert!(rosters[1].is_empty());
}
