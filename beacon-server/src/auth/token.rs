use crate::auth::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

/// Token lifetime. The relay never re-checks tokens on socket events, so
/// the expiry only bounds how long a stored token keeps working for login.
const TOKEN_EXPIRY_HOURS: i64 = 24;

/// Claims carried by a login token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign a login token (HS256) for the given username.
pub fn issue_token(username: &str, secret: &str) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        sub: username.to_owned(),
        iat: now,
        exp: now + TOKEN_EXPIRY_HOURS * 3600,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
