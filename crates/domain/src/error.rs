//! API error taxonomy.

use thiserror::Error;

/// Classification of a failed API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401. Never surfaced as a global notification; callers decide.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 500.
    ServerError,
    /// Any other HTTP error status.
    OtherStatus,
    /// No response was received (connectivity failure or timeout).
    NetworkError,
    /// The request was never dispatched (client-side failure).
    UnknownError,
}

/// A classified API failure carrying the original status, the target URL,
/// and the user-facing message computed at interception time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// What went wrong.
    pub kind: ApiErrorKind,
    /// Target URL of the failed request.
    pub url: String,
    /// HTTP status, when a response was received.
    pub status: Option<u16>,
    /// User-facing message.
    pub message: String,
}

impl ApiError {
    /// Classifies a server-returned error status into the taxonomy,
    /// computing the message shown to the seller.
    #[must_use]
    pub fn from_status(status: u16, server_message: Option<&str>, url: &str) -> Self {
        let (kind, message) = match status {
            400 => (
                ApiErrorKind::BadRequest,
                format!(
                    "Bad request: {}",
                    server_message.unwrap_or("check the request parameters")
                ),
            ),
            401 => (
                ApiErrorKind::Unauthorized,
                "Authentication required. Please log in again.".to_owned(),
            ),
            403 => (
                ApiErrorKind::Forbidden,
                "You do not have permission to perform this action.".to_owned(),
            ),
            404 => (
                ApiErrorKind::NotFound,
                format!("The requested resource could not be found: {url}"),
            ),
            500 => (
                ApiErrorKind::ServerError,
                "A server error occurred. Please try again later.".to_owned(),
            ),
            _ => (
                ApiErrorKind::OtherStatus,
                server_message.map_or_else(|| format!("An error occurred ({status})"), str::to_owned),
            ),
        };

        Self {
            kind,
            url: url.to_owned(),
            status: Some(status),
            message,
        }
    }

    /// A connectivity failure: the request went out but no response came back.
    #[must_use]
    pub fn network(url: &str) -> Self {
        Self {
            kind: ApiErrorKind::NetworkError,
            url: url.to_owned(),
            status: None,
            message: "Could not reach the server. Check your network connection.".to_owned(),
        }
    }

    /// A client-side failure before the request was dispatched.
    #[must_use]
    pub fn request(url: &str, detail: Option<&str>) -> Self {
        let message = detail
            .filter(|d| !d.is_empty())
            .map_or_else(
                || "An error occurred while processing the request.".to_owned(),
                str::to_owned,
            );
        Self {
            kind: ApiErrorKind::UnknownError,
            url: url.to_owned(),
            status: None,
            message,
        }
    }

    /// True for every kind that is surfaced as a global notification.
    /// `Unauthorized` is the single silent case.
    #[must_use]
    pub const fn should_notify(&self) -> bool {
        !matches!(self.kind, ApiErrorKind::Unauthorized)
    }
}
