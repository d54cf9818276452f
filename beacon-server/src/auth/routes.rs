use crate::auth::error::AuthError;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::store::{StoreError, UserRecord};
use crate::auth::token::issue_token;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    let password_hash = hash_password(&credentials.password)?;

    let record = UserRecord {
        username: credentials.username.clone(),
        password_hash,
    };

    match state.users.insert(record).await {
        Ok(()) => {}
        Err(StoreError::Duplicate) => return Err(AuthError::UserExists),
        Err(e) => return Err(e.into()),
    }

    info!("Registered user '{}'", credentials.username);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user created".to_owned(),
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = state.users.find(&credentials.username).await;

    // bcrypt runs even for unknown usernames, against a dummy hash, so the
    // two rejections are not distinguishable by timing.
    let valid = verify_password(
        &credentials.password,
        user.as_ref().map(|u| u.password_hash.as_str()),
    )?;

    if !valid {
        return Err(AuthError::InvalidCredentials);
    }

    let token = issue_token(&credentials.username, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        username: credentials.username,
    }))
}
