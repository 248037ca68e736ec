//! OS credential store operations for persistent token storage.
//!
//! Uses the `keyring` crate (apple-native on macOS). The token lives under a
//! fixed service/account key so it can be found again after a restart. The
//! client itself only reads and clears this tier -- the embedding host writes
//! it through `store_token`.

use keyring::Entry;
use thiserror::Error;

use super::store::TokenTier;

/// Credential store service name for this client.
const SERVICE_NAME: &str = "com.portfolio.client";

/// Fixed account key under which the auth token is stored.
const TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Error)]
pub enum KeychainError {
    #[error("Keychain operation failed: {0}")]
    OperationFailed(String),
}

impl From<keyring::Error> for KeychainError {
    fn from(err: keyring::Error) -> Self {
        KeychainError::OperationFailed(err.to_string())
    }
}

/// Store the auth token in the OS credential store.
///
/// Called by the embedding host after a completed login, never by the
/// client's own `set` path.
pub fn store_token(token: &str) -> Result<(), KeychainError> {
    let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)?;
    entry.set_password(token)?;
    Ok(())
}

/// Retrieve the auth token from the OS credential store.
///
/// Returns `None` if no entry exists (never logged in, or cleared).
pub fn get_token() -> Result<Option<String>, KeychainError> {
    let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)?;
    match entry.get_password() {
        Ok(token) => Ok(Some(token)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(KeychainError::from(e)),
    }
}

/// Delete the auth token from the OS credential store.
///
/// Idempotent: ignores `NoEntry` (already deleted or never stored).
pub fn delete_token() -> Result<(), KeychainError> {
    let entry = Entry::new(SERVICE_NAME, TOKEN_KEY)?;
    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(KeychainError::from(e)),
    }
}

/// Persistent tier backed by the OS credential store.
///
/// Failures degrade rather than propagate: an unreadable keychain reports an
/// absent token, a failed clear logs and moves on. The store contract keeps
/// these operations infallible.
pub struct KeychainTier;

impl KeychainTier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeychainTier {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenTier for KeychainTier {
    fn load(&self) -> Option<String> {
        match get_token() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Failed to read token from credential store: {}", e);
                None
            }
        }
    }

    fn store(&self, token: &str) {
        if let Err(e) = store_token(token) {
            log::warn!("Failed to store token in credential store: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = delete_token() {
            log::warn!("Failed to clear token from credential store: {}", e);
        }
    }
}
