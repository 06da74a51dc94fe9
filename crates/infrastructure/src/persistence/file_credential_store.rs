//! File-based credential store implementation.
//!
//! Each credential slot is one file inside the data directory, named after
//! the slot (`seller_token`, `seller_refreshToken`, `seller_user`). Slots
//! are written independently, mirroring the durable key-value storage the
//! dashboard was designed around: there is no transaction across slots, so
//! a crash between two writes can leave partial state. Readers that need
//! consistency check multiple slots.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use oship_application::ports::{CredentialKey, CredentialStore, StorageError};

/// File-per-slot credential store.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store rooted at the given data directory.
    ///
    /// The directory is created on the first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the slots live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: CredentialKey) -> PathBuf {
        self.dir.join(key.as_str())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err.to_string())),
        }
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|err| StorageError::Io(err.to_string()))?;
        fs::write(self.slot_path(key), value)
            .await
            .map_err(|err| StorageError::Io(err.to_string()))
    }

    async fn remove(&self, key: CredentialKey) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        assert_eq!(store.get(CredentialKey::AccessToken).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        store
            .set(CredentialKey::AccessToken, "token-123")
            .await
            .unwrap();

        assert_eq!(
            store.get(CredentialKey::AccessToken).await.unwrap().as_deref(),
            Some("token-123")
        );
        assert!(dir.path().join("seller_token").exists());
    }

    #[tokio::test]
    async fn test_set_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested").join("oship"));

        store
            .set(CredentialKey::UserProfile, r#"{"id":1}"#)
            .await
            .unwrap();

        assert_eq!(
            store.get(CredentialKey::UserProfile).await.unwrap().as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        store.set(CredentialKey::RefreshToken, "rt").await.unwrap();
        store.remove(CredentialKey::RefreshToken).await.unwrap();
        // Removing again must not fail.
        store.remove(CredentialKey::RefreshToken).await.unwrap();

        assert_eq!(store.get(CredentialKey::RefreshToken).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_all_empties_every_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        store.set(CredentialKey::AccessToken, "at").await.unwrap();
        store.set(CredentialKey::RefreshToken, "rt").await.unwrap();
        store
            .set(CredentialKey::UserProfile, r#"{"id":1}"#)
            .await
            .unwrap();

        store.clear_all().await.unwrap();

        for key in CredentialKey::ALL {
            assert_eq!(store.get(key).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_slots_are_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path());

        store.set(CredentialKey::AccessToken, "at").await.unwrap();

        // Only the token slot exists; the others stay missing.
        assert!(dir.path().join("seller_token").exists());
        assert!(!dir.path().join("seller_refreshToken").exists());
        assert!(!dir.path().join("seller_user").exists());
    }
}
