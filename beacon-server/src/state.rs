use crate::auth::UserStore;
use crate::config::Config;
use crate::gateway::GatewayService;
use std::sync::Arc;

/// Shared state handed to every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: GatewayService,
    pub users: Arc<UserStore>,
    pub config: Arc<Config>,
}
