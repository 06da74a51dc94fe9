//! O-Ship Seller Client - Application layer
//!
//! Owns the authenticated API-access core of the dashboard: the configured
//! [`ApiClient`] with its interceptor pipeline, the [`SessionManager`]
//! (single source of truth for authentication state), the
//! [`NavigationGuard`], and the thin per-resource API modules. Everything
//! external (HTTP, durable storage, user notifications) is reached through
//! ports implemented by the infrastructure crate.

pub mod api;
pub mod client;
pub mod guard;
pub mod ports;
pub mod session;
pub mod testing;

pub use client::{
    ApiClient, BearerAuth, ErrorNotifier, RequestInterceptor, RequestOptions, ResponseInterceptor,
    StatusClassifier,
};
pub use guard::NavigationGuard;
pub use session::{AuthError, LoginCredentials, SessionManager};
