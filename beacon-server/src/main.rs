use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use beacon_server::auth::{UserStore, login, register};
use beacon_server::config::Config;
use beacon_server::gateway::{GatewayService, ws_handler};
use beacon_server::relay::Relay;
use beacon_server::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Arc::new(Config::from_env().context("loading configuration")?);
    info!("Starting with {:?}", config);

    let users = Arc::new(
        UserStore::open(&config.data_file, &config.encryption_pass)
            .await
            .context("opening user store")?,
    );

    let (relay_cmd_tx, relay_cmd_rx) = mpsc::channel(256);
    let gateway = GatewayService::new(relay_cmd_tx);

    let relay = Relay::new(relay_cmd_rx, Arc::new(gateway.clone()));
    tokio::spawn(relay.run());

    let state = AppState {
        gateway,
        users,
        config: config.clone(),
    };

    let app = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("binding {}", config.bind_address))?;

    info!("Server running on {}", config.bind_address);

    axum::serve(listener, app).await.context("serving")?;

    Ok(())
}
