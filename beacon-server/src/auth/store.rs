use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use ring::aead::{AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

/// Salt for deriving the file key from the configured passphrase.
/// Changing it invalidates every existing data file.
const KEY_SALT: &[u8] = b"beacon-user-store";

const PBKDF2_ITERATIONS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username is taken")]
    Duplicate,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("data file is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("data file could not be decrypted (wrong passphrase or corrupt file)")]
    Crypto,

    #[error("data file holds invalid records: {0}")]
    Format(#[from] serde_json::Error),
}

/// One persisted account. Only the bcrypt hash ever reaches disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}

/// The flat user collection, encrypted at rest.
///
/// The whole collection is serialized as JSON, sealed with AES-256-GCM
/// (12-byte nonce prepended, base64 on disk) and rewritten on every
/// registration. At this scale one sealed blob is simpler than an
/// incremental format.
pub struct UserStore {
    path: PathBuf,
    key: LessSafeKey,
    users: Mutex<Vec<UserRecord>>,
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("path", &self.path)
            .field("key", &"<redacted>")
            .field("users", &self.users)
            .finish()
    }
}

impl UserStore {
    /// Open the store, deriving the file key from `passphrase` and loading
    /// any existing records. A missing or empty file yields an empty
    /// collection; a file that fails to decrypt is an error at startup,
    /// not a silent reset.
    pub async fn open(path: impl Into<PathBuf>, passphrase: &str) -> Result<Self, StoreError> {
        let path = path.into();
        let key = derive_key(passphrase)?;

        let users = match tokio::fs::read_to_string(&path).await {
            Ok(contents) if !contents.trim().is_empty() => {
                let records = unseal(&key, contents.trim())?;
                info!("Loaded {} users from {}", records.len(), path.display());
                records
            }
            Ok(_) => Vec::new(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            key,
            users: Mutex::new(users),
        })
    }

    /// Look up an account by username.
    pub async fn find(&self, username: &str) -> Option<UserRecord> {
        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Insert a new account and rewrite the encrypted file. Fails without
    /// touching disk when the username is taken. The lock is held across
    /// the write, so concurrent registrations serialize.
    pub async fn insert(&self, record: UserRecord) -> Result<(), StoreError> {
        let mut users = self.users.lock().await;

        if users.iter().any(|u| u.username == record.username) {
            return Err(StoreError::Duplicate);
        }

        users.push(record);

        let sealed = seal(&self.key, &users)?;
        tokio::fs::write(&self.path, sealed).await?;
        info!("User database encrypted and saved ({} users)", users.len());

        Ok(())
    }
}

fn derive_key(passphrase: &str) -> Result<LessSafeKey, StoreError> {
    let mut key_bytes = [0u8; 32];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        PBKDF2_ITERATIONS,
        KEY_SALT,
        passphrase.as_bytes(),
        &mut key_bytes,
    );

    let unbound = UnboundKey::new(&AES_256_GCM, &key_bytes).map_err(|_| StoreError::Crypto)?;
    Ok(LessSafeKey::new(unbound))
}

fn seal(key: &LessSafeKey, users: &[UserRecord]) -> Result<String, StoreError> {
    let rng = SystemRandom::new();
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill(&mut nonce_bytes).map_err(|_| StoreError::Crypto)?;

    let mut in_out = serde_json::to_vec(users)?;
    key.seal_in_place_append_tag(
        Nonce::assume_unique_for_key(nonce_bytes),
        Aad::empty(),
        &mut in_out,
    )
    .map_err(|_| StoreError::Crypto)?;

    let mut blob = nonce_bytes.to_vec();
    blob.extend_from_slice(&in_out);

    Ok(BASE64.encode(blob))
}

fn unseal(key: &LessSafeKey, contents: &str) -> Result<Vec<UserRecord>, StoreError> {
    let blob = BASE64.decode(contents)?;

    if blob.len() < NONCE_LEN {
        return Err(StoreError::Crypto);
    }
    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::try_assume_unique_for_key(nonce_bytes).map_err(|_| StoreError::Crypto)?;

    let mut in_out = ciphertext.to_vec();
    let plaintext = key
        .open_in_place(nonce, Aad::empty(), &mut in_out)
        .map_err(|_| StoreError::Crypto)?;

    Ok(serde_json::from_slice(plaintext)?)
}
