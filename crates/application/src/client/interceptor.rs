//! Request/response interceptor pipeline.
//!
//! The cross-cutting behavior of the HTTP client lives here as an ordered
//! middleware chain instead of inline in the request path: bearer-token
//! injection on the way out; error classification and the global
//! notification policy on the way back. Each stage is testable in
//! isolation.

use std::sync::Arc;

use async_trait::async_trait;

use oship_domain::ApiError;

use crate::ports::{CredentialKey, CredentialStore, Notifier, TransportRequest, TransportResponse};

/// Transforms an outgoing request before it reaches the transport.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Returns the (possibly modified) request to send.
    async fn intercept(&self, request: TransportRequest) -> TransportRequest;
}

/// Transforms the outcome of a call after the transport returns.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Returns the (possibly modified) outcome to hand to the next stage.
    async fn intercept(
        &self,
        outcome: Result<TransportResponse, ApiError>,
    ) -> Result<TransportResponse, ApiError>;
}

/// Attaches `Authorization: Bearer <token>` when a token is stored.
///
/// The token is re-read from durable storage before every call, so a login
/// or logout in another part of the app takes effect immediately. A missing
/// token is not an error: the request proceeds unauthenticated and the
/// server stays authoritative. A store read failure is treated the same.
pub struct BearerAuth {
    store: Arc<dyn CredentialStore>,
}

impl BearerAuth {
    /// Creates the interceptor over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RequestInterceptor for BearerAuth {
    async fn intercept(&self, mut request: TransportRequest) -> TransportRequest {
        match self.store.get(CredentialKey::AccessToken).await {
            Ok(Some(token)) => {
                request
                    .headers
                    .push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
            Ok(None) => {
                tracing::debug!(url = %request.url, "no stored token, sending unauthenticated");
            }
            Err(err) => {
                tracing::warn!(%err, url = %request.url, "credential store read failed, sending unauthenticated");
            }
        }
        request
    }
}

/// Classifies error statuses (>= 400) into the [`ApiError`] taxonomy.
///
/// Success responses pass through unchanged; transport-level failures were
/// already mapped before the response chain runs.
pub struct StatusClassifier;

#[async_trait]
impl ResponseInterceptor for StatusClassifier {
    async fn intercept(
        &self,
        outcome: Result<TransportResponse, ApiError>,
    ) -> Result<TransportResponse, ApiError> {
        match outcome {
            Ok(response) if response.status >= 400 => Err(ApiError::from_status(
                response.status,
                response.server_message().as_deref(),
                &response.url,
            )),
            other => other,
        }
    }
}

/// Applies the global notification policy.
///
/// Every classified failure except `Unauthorized` is surfaced immediately
/// as a transient notification, regardless of call site; call sites cannot
/// suppress it. `Unauthorized` is returned silently so callers can decide
/// whether to redirect to login.
pub struct ErrorNotifier {
    notifier: Arc<dyn Notifier>,
}

impl ErrorNotifier {
    /// Creates the interceptor over the given notifier.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl ResponseInterceptor for ErrorNotifier {
    async fn intercept(
        &self,
        outcome: Result<TransportResponse, ApiError>,
    ) -> Result<TransportResponse, ApiError> {
        if let Err(error) = &outcome {
            tracing::warn!(
                url = %error.url,
                status = ?error.status,
                kind = ?error.kind,
                message = %error.message,
                "api call failed"
            );
            if error.should_notify() {
                self.notifier.notify_error(&error.message);
            }
        }
        outcome
    }
}
