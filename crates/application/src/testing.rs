//! In-memory test doubles for the ports.
//!
//! Shared by the unit tests in this crate and the integration suite in the
//! app crate. The doubles are deliberately small: a HashMap-backed
//! credential store, a scripted transport that records every request, a
//! transport that always fails, and a notifier that captures messages.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use crate::ports::{
    CredentialKey, CredentialStore, HttpTransport, Notifier, StorageError, TransportError,
    TransportRequest, TransportResponse,
};

/// HashMap-backed credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    slots: RwLock<HashMap<CredentialKey, String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with all three slots.
    #[must_use]
    pub fn seeded(token: &str, refresh_token: &str, user_json: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(CredentialKey::AccessToken, token.to_owned());
        slots.insert(CredentialKey::RefreshToken, refresh_token.to_owned());
        slots.insert(CredentialKey::UserProfile, user_json.to_owned());
        Self {
            slots: RwLock::new(slots),
        }
    }

    /// Number of populated slots.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    /// True if no slot is populated.
    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, StorageError> {
        Ok(self.slots.read().await.get(&key).cloned())
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), StorageError> {
        self.slots.write().await.insert(key, value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: CredentialKey) -> Result<(), StorageError> {
        self.slots.write().await.remove(&key);
        Ok(())
    }
}

/// Scripted response queue.
#[derive(Debug, Clone)]
struct ScriptedResponse {
    status: u16,
    body: Vec<u8>,
}

/// Transport double that replays queued responses and records every request.
///
/// When the queue is empty, calls succeed with `200` and a `null` body.
#[derive(Debug, Default)]
pub struct StaticTransport {
    queue: Mutex<VecDeque<Result<ScriptedResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StaticTransport {
    /// Creates a transport with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response with the given status.
    pub async fn enqueue_json(&self, status: u16, body: &Value) {
        self.queue.lock().await.push_back(Ok(ScriptedResponse {
            status,
            body: body.to_string().into_bytes(),
        }));
    }

    /// Queues a transport-level failure.
    pub async fn enqueue_error(&self, error: TransportError) {
        self.queue.lock().await.push_back(Err(error));
    }

    /// Requests seen so far, in order.
    pub async fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for StaticTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let url = request.url.clone();
        self.requests.lock().await.push(request);

        match self.queue.lock().await.pop_front() {
            Some(Ok(scripted)) => Ok(TransportResponse {
                status: scripted.status,
                url,
                body: scripted.body,
            }),
            Some(Err(error)) => Err(error),
            None => Ok(TransportResponse {
                status: 200,
                url,
                body: b"null".to_vec(),
            }),
        }
    }
}

/// Transport double that fails every call with a clone of one error.
#[derive(Debug)]
pub struct FailingTransport {
    error: TransportError,
}

impl FailingTransport {
    /// Creates the transport with the error to return.
    #[must_use]
    pub const fn new(error: TransportError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl HttpTransport for FailingTransport {
    async fn execute(
        &self,
        _request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        Err(self.error.clone())
    }
}

/// Notifier double that captures every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: StdMutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages captured so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(message.to_owned());
    }
}
