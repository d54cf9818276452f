use beacon_core::RoomId;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_client, flush_relay, join_voice};

/// Joining a second voice room implicitly leaves the first: the final
/// rosters show the connection in the new room only, and the entry
/// reflects the most recently supplied identity and address.
#[tokio::test]
async fn test_switching_voice_rooms() {
    init_tracing();

    let (cmd_tx, mut event_rx, output) = create_test_relay();
    let first = RoomId::from("Lobby");
    let second = RoomId::from("Gaming");

    let a = connect_client(&cmd_tx, &mut event_rx).await;

    join_voice(&cmd_tx, &a, "Lobby", "ann", "peer-a").await;
    join_voice(&cmd_tx, &a, "Gaming", "ann", "peer-a2").await;
    flush_relay(&cmd_tx, &mut event_rx).await;

    // The first room saw the join, then emptied on the switch.
    let rosters = output.rosters_for(&first).await;
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].len(), 1);
    assert!(rosters[1].is_empty());

    // The second room holds exactly one entry for the connection, carrying
    // the address supplied at the second join.
    let rosters = output.rosters_for(&second).await;
    assert_eq!(rosters.len(), 1);
    assert_eq!(rosters[0].len(), 1);
    assert_eq!(rosters[0][0].connection_id, a);
    assert_eq!(rosters[0][0].signaling_address, "peer-a2");
}
