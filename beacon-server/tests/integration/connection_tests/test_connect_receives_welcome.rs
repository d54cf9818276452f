use beacon_core::{ConnectionId, ServerEvent};
use beacon_server::RelayCommand;

use crate::integration::{create_test_relay, init_tracing};
use crate::utils::{Delivery, recv_event};

#[tokio::test]
async fn test_connect_receives_welcome() {
    init_tracing();

    let (cmd_tx, mut event_rx, _output) = create_test_relay();

    let connection_id = ConnectionId::new();
    cmd_tx
        .send(RelayCommand::Connect {
            connection_id: connection_id.clone(),
        })
        .await
        .expect("relay not running");

    let out = recv_event(&mut event_rx).await;

    assert_eq!(out.delivery, Delivery::To(connection_id.clone()));
    assert_eq!(
        out.event,
        ServerEvent::Welcome {
            connection_id: connection_id.clone()
        }
    );
}
