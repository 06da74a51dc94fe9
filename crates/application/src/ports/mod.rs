//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer (or by a test double from [`crate::testing`]).

mod credential_store;
mod http_transport;
mod notifier;

pub use credential_store::{CredentialKey, CredentialStore, StorageError};
pub use http_transport::{
    HttpMethod, HttpTransport, RequestPayload, TransportError, TransportRequest, TransportResponse,
};
pub use notifier::Notifier;
