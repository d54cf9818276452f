//! Server configuration.
//!
//! Loaded from environment variables. Secrets are redacted in Debug output.

use std::env;
use std::fmt;
use thiserror::Error;

/// Default TCP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3001";

/// Default path of the encrypted user database.
pub const DEFAULT_DATA_FILE: &str = "users.enc";

/// Default passphrase for the user database. Override in any real
/// deployment; the default only keeps local setups running.
pub const DEFAULT_ENCRYPTION_PASS: &str = "default-password";

#[derive(Clone)]
pub struct Config {
    /// Address the HTTP/WebSocket server binds to.
    pub bind_address: String,

    /// Path of the encrypted user database.
    pub data_file: String,

    /// Passphrase the user-database file key is derived from.
    pub encryption_pass: String,

    /// HMAC secret for signing login tokens.
    pub jwt_secret: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

impl Config {
    /// Load configuration from the environment. Everything except the
    /// token secret has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned()),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_owned()),
            encryption_pass: env::var("ENCRYPTION_PASS")
                .unwrap_or_else(|_| DEFAULT_ENCRYPTION_PASS.to_owned()),
            jwt_secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
        })
    }
}

/// Custom Debug implementation that redacts secret material.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("data_file", &self.data_file)
            .field("encryption_pass", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}
