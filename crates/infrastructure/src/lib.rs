//! O-Ship Seller Client - Infrastructure adapters
//!
//! Concrete implementations of the application-layer ports: a reqwest-based
//! HTTP transport, a file-backed credential store, and notifier adapters.

pub mod notify;
pub mod persistence;
pub mod transport;

pub use notify::{ChannelNotifier, TracingNotifier};
pub use persistence::FileCredentialStore;
pub use transport::ReqwestTransport;
