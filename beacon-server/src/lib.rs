pub mod auth;
pub mod config;
pub mod gateway;
pub mod relay;
pub mod state;

pub use auth::*;
pub use config::*;
pub use gateway::*;
pub use relay::*;
pub use state::*;
