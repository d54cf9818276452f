use beacon_core::RoomId;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_client, flush_relay, join_voice};

/// A and B join "Lobby" in that order: two roster broadcasts, the second
/// listing both in join order, and exactly one peer announce, delivered to
/// A (the member already present) with B's signaling address.
#[tokio::test]
async fn test_two_peers_join_lobby() {
    init_tracing();

    let (cmd_tx, mut event_rx, output) = create_test_relay();
    let lobby = RoomId::from("Lobby");

    let a = connect_client(&cmd_tx, &mut event_rx).await;
    let b = connect_client(&cmd_tx, &mut event_rx).await;

    join_voice(&cmd_tx, &a, "Lobby", "ann", "peer-a").await;
    join_voice(&cmd_tx, &b, "Lobby", "bob", "peer-b").await;
    flush_relay(&cmd_tx, &mut event_rx).await;

    let rosters = output.rosters_for(&lobby).await;
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].len(), 1);
    assert_eq!(rosters[0][0].identity, "ann");
    assert_eq!(rosters[1].len(), 2);
    assert_eq!(rosters[1][0].identity, "ann");
    assert_eq!(rosters[1][1].identity, "bob");

    assert_eq!(output.announces_for(&a).await, vec!["peer-b".to_owned()]);
    assert!(output.announces_for(&b).await.is_empty());
}
