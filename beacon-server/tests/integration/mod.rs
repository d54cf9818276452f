
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Level;

use beacon_server::{Relay, RelayCommand};

use crate::utils::{MockRelayOutput, OutboundEvent};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn create_test_relay() -> (
    mpsc::Sender<RelayCommand>,
    mpsc::UnboundedReceiver<OutboundEvent>,
    MockRelayOutput,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<RelayCommand>(100);
    let (output, event_rx) = MockRelayOutput::new();

    let relay = Relay::new(cmd_rx, Arc::new(output.clone()));

    tokio::spawn(async move {
        relay.run().await;
    });

    (cmd_tx, event_rx, output)
}
