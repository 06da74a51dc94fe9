//! HTTP transport port.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use oship_domain::DEFAULT_TIMEOUT;

/// HTTP methods used by the dashboard API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Canonical method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPayload {
    /// No body.
    Empty,
    /// JSON-encoded body.
    Json(Value),
    /// Multipart file upload.
    Multipart {
        /// Form field name the file is attached under.
        field_name: String,
        /// File name reported to the server.
        file_name: String,
        /// Raw file contents.
        bytes: Vec<u8>,
    },
}

/// A fully resolved outgoing request, after the interceptor chain ran.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute target URL.
    pub url: String,
    /// Headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: RequestPayload,
    /// Per-request timeout; the transport fails the call once it elapses.
    pub timeout: Duration,
}

impl TransportRequest {
    /// Creates a request with no headers, no body, and the default timeout.
    #[must_use]
    pub const fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: RequestPayload::Empty,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// True if a header with the given name is already set.
    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(header, _)| header.eq_ignore_ascii_case(name))
    }

    /// Reads the first header with the given name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A raw response as returned by the transport.
///
/// Success and error statuses both arrive here; classification into
/// [`oship_domain::ApiError`] happens in the interceptor pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// URL the response was received from.
    pub url: String,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Decodes the body as JSON. An empty or undecodable body is `Null`.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    /// Server-provided detail message, when the body carries one.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        self.json()
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
    }
}

/// Transport-level failures: the call produced no HTTP response at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The configured timeout elapsed.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),
    /// The request could not be built (bad URL, header, or body).
    #[error("request could not be built: {0}")]
    Request(String),
    /// The connection broke while sending or receiving.
    #[error("i/o failure: {0}")]
    Io(String),
}

impl TransportError {
    /// True when the request was dispatched but no response arrived;
    /// false when the request was never formed at all.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connect(_) | Self::Io(_))
    }
}

/// Port for executing HTTP requests.
///
/// Implementations execute exactly one attempt per call: no retries, no
/// redirect-driven re-authentication, no cancellation. An in-flight request
/// runs to completion or timeout.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes a request and returns the raw response.
    async fn execute(&self, request: TransportRequest)
    -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut request = TransportRequest::new(HttpMethod::Get, "http://x/api".to_owned());
        request
            .headers
            .push(("Content-Type".to_owned(), "application/json".to_owned()));
        assert!(request.has_header("content-type"));
        assert_eq!(request.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_response_json_tolerates_garbage() {
        let response = TransportResponse {
            status: 200,
            url: "http://x/api".to_owned(),
            body: b"not json".to_vec(),
        };
        assert_eq!(response.json(), Value::Null);
        assert_eq!(response.server_message(), None);
    }

    #[test]
    fn test_server_message_extraction() {
        let response = TransportResponse {
            status: 400,
            url: "http://x/api".to_owned(),
            body: br#"{"message":"bad seller id"}"#.to_vec(),
        };
        assert_eq!(response.server_message().as_deref(), Some("bad seller id"));
    }

    #[test]
    fn test_network_vs_request_errors() {
        assert!(TransportError::Timeout { timeout_ms: 10_000 }.is_network());
        assert!(TransportError::Connect("refused".to_owned()).is_network());
        assert!(TransportError::Io("reset".to_owned()).is_network());
        assert!(!TransportError::Request("bad url".to_owned()).is_network());
    }
}
