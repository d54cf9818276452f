use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{connect_client, flush_relay, join_text, send_chat};

/// Chat goes to subscribers of the message's text room only, and never
/// back to the sender.
#[tokio::test]
async fn test_chat_reaches_text_subscribers() {
    init_tracing();

    let (cmd_tx, mut event_rx, output) = create_test_relay();

    let a = connect_client(&cmd_tx, &mut event_rx).await;
    let b = connect_client(&cmd_tx, &mut event_rx).await;
    let c = connect_client(&cmd_tx, &mut event_rx).await;

    join_text(&cmd_tx, &a, "General").await;
    join_text(&cmd_tx, &b, "General").await;
    join_text(&cmd_tx, &c, "Random").await;

    send_chat(&cmd_tx, &a, "General", "ann", "hi").await;
    flush_relay(&cmd_tx, &mut event_rx).await;

    let to_b = output.chats_for(&b).await;
    assert_eq!(to_b.len(), 1);
    assert_eq!(to_b[0].author, "ann");
    assert_eq!(to_b[0].text, "hi");

    assert!(output.chats_for(&a).await.is_empty(), "sender is excluded");
    assert!(output.chats_for(&c).await.is_empty(), "other rooms hear nothing");
}
