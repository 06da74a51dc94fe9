//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest
//! library. It handles all HTTP communication for the dashboard client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url, multipart};

use oship_application::ports::{
    HttpMethod, HttpTransport, RequestPayload, TransportError, TransportRequest, TransportResponse,
};

/// HTTP transport backed by a shared `reqwest::Client`.
///
/// One instance serves the whole application. Timeouts are applied per
/// request from the [`TransportRequest`]; the client itself carries no
/// global timeout so uploads can run long.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    ///
    /// # Errors
    /// Returns [`TransportError::Request`] if the client cannot be built.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("oship-seller/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a transport over a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors onto the transport taxonomy. Timeout and
    /// connection failures count as network errors (the request was
    /// dispatched); builder failures mean the request never left.
    fn map_error(error: &reqwest::Error, timeout: Duration) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout {
                timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            };
        }
        if error.is_connect() {
            return TransportError::Connect(error.to_string());
        }
        if error.is_builder() || error.is_request() {
            return TransportError::Request(error.to_string());
        }
        TransportError::Io(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let url = Url::parse(&request.url)
            .map_err(|err| TransportError::Request(format!("{err}: {}", request.url)))?;
        let timeout = request.timeout;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder = match request.body {
            RequestPayload::Empty => builder,
            // The content-type header was already set upstream; encode the
            // body directly instead of going through `.json()`.
            RequestPayload::Json(value) => {
                let bytes = serde_json::to_vec(&value)
                    .map_err(|err| TransportError::Request(err.to_string()))?;
                builder.body(bytes)
            }
            RequestPayload::Multipart {
                field_name,
                file_name,
                bytes,
            } => {
                let part = multipart::Part::bytes(bytes).file_name(file_name);
                builder.multipart(multipart::Form::new().part(field_name, part))
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|err| Self::map_error(&err, timeout))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|err| TransportError::Io(err.to_string()))?
            .to_vec();

        Ok(TransportResponse {
            status,
            url: final_url,
            body,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
        assert_eq!(
            ReqwestTransport::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_request_error() {
        let transport = ReqwestTransport::new().unwrap();
        let request = TransportRequest::new(HttpMethod::Get, "not a url".to_owned());

        let error = transport.execute(request).await.unwrap_err();
        assert!(matches!(error, TransportError::Request(_)));
        assert!(!error.is_network());
    }
}
