//! Credential storage port.

use async_trait::async_trait;
use thiserror::Error;

/// The three durable credential slots.
///
/// Slot names are fixed wire-level identifiers; the store persists each slot
/// independently, with no transactional guarantee across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKey {
    /// The bearer token attached to API requests.
    AccessToken,
    /// The token used to obtain a new access token.
    RefreshToken,
    /// The seller profile, JSON-encoded.
    UserProfile,
}

impl CredentialKey {
    /// Every slot, in write order (token first so authentication state is
    /// accurate as early as possible).
    pub const ALL: [Self; 3] = [Self::AccessToken, Self::RefreshToken, Self::UserProfile];

    /// Fixed storage name of this slot.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "seller_token",
            Self::RefreshToken => "seller_refreshToken",
            Self::UserProfile => "seller_user",
        }
    }
}

/// Errors raised by a credential store adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The underlying storage could not be read or written.
    #[error("storage i/o failure: {0}")]
    Io(String),
    /// A stored value could not be encoded or decoded.
    #[error("corrupt stored value: {0}")]
    Corrupt(String),
}

/// Port for durable, per-slot credential storage.
///
/// Reads and writes are independent per slot; a crash between two `set`
/// calls can leave partial state behind. Consumers that need consistency
/// must check multiple slots (as the navigation guard does).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads a slot. A missing slot is `None`, not an error.
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, StorageError>;

    /// Writes a slot, replacing any previous value.
    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), StorageError>;

    /// Removes a slot. Removing a missing slot is not an error.
    async fn remove(&self, key: CredentialKey) -> Result<(), StorageError>;

    /// Best-effort removal of all three slots. Every slot is attempted even
    /// if an earlier removal fails; the first error is reported afterwards.
    async fn clear_all(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in CredentialKey::ALL {
            if let Err(err) = self.remove(key).await {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
