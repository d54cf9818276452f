use crate::auth::error::AuthError;

/// bcrypt cost used for new accounts.
const BCRYPT_COST: u32 = 12;

/// Hash verified when the account does not exist, so a login against an
/// unknown username takes as long as one against a wrong password.
const DUMMY_HASH: &str = "$2b$12$LQv3c1yqBWVHxkd0LHAkCOYz6TtxMQJqhN8/LewY5GyYqExt7YD3a";

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Verify a password against the stored hash, or against a dummy hash when
/// the account is unknown. Returns `false` for an unknown account even if
/// the dummy hash were to match.
pub fn verify_password(password: &str, hash: Option<&str>) -> Result<bool, AuthError> {
    let stored = hash.unwrap_or(DUMMY_HASH);
    let matched = bcrypt::verify(password, stored)?;

    Ok(hash.is_some() && matched)
}
