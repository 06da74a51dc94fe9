//! The configured API client.
//!
//! A single [`ApiClient`] instance serves the whole dashboard. It builds
//! the target URL from the environment-selected base, runs the interceptor
//! pipeline around the transport, and hands every call site either the raw
//! response or a classified [`ApiError`]. Failed calls always propagate to
//! the caller; whether they also raise a user notification is decided by
//! the pipeline, not the call site.

mod interceptor;

pub use interceptor::{
    BearerAuth, ErrorNotifier, RequestInterceptor, ResponseInterceptor, StatusClassifier,
};

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use oship_domain::{ApiConfig, ApiError, DEFAULT_TIMEOUT, UPLOAD_TIMEOUT};

use crate::ports::{
    CredentialStore, HttpMethod, HttpTransport, Notifier, RequestPayload, TransportRequest,
    TransportResponse,
};

/// Per-call options. The defaults match almost every endpoint.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Overrides the 10 second default timeout.
    pub timeout: Option<Duration>,
    /// Query parameters appended to the path, percent-encoded.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// Options carrying only query parameters.
    #[must_use]
    pub fn with_query(query: Vec<(String, String)>) -> Self {
        Self {
            timeout: None,
            query,
        }
    }
}

/// The single configured HTTP client for the dashboard.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    config: ApiConfig,
    request_chain: Vec<Arc<dyn RequestInterceptor>>,
    response_chain: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Creates a client with the default interceptor pipeline:
    /// bearer-token injection, status classification, then the global
    /// notification policy.
    #[must_use]
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        config: ApiConfig,
    ) -> Self {
        Self {
            transport,
            config,
            request_chain: vec![Arc::new(BearerAuth::new(store))],
            response_chain: vec![
                Arc::new(StatusClassifier),
                Arc::new(ErrorNotifier::new(notifier)),
            ],
        }
    }

    /// Creates a client with an explicit pipeline.
    #[must_use]
    pub fn with_pipeline(
        transport: Arc<dyn HttpTransport>,
        config: ApiConfig,
        request_chain: Vec<Arc<dyn RequestInterceptor>>,
        response_chain: Vec<Arc<dyn ResponseInterceptor>>,
    ) -> Self {
        Self {
            transport,
            config,
            request_chain,
            response_chain,
        }
    }

    /// Joins a path (and query) onto the configured base URL.
    fn build_url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{path}", self.config.base_url());
        if !query.is_empty() {
            let mut serializer = url::form_urlencoded::Serializer::new(String::new());
            for (name, value) in query {
                serializer.append_pair(name, value);
            }
            url.push('?');
            url.push_str(&serializer.finish());
        }
        url
    }

    /// Executes a request through the interceptor pipeline.
    ///
    /// # Errors
    /// Returns the classified [`ApiError`] for error statuses, connectivity
    /// failures (`NetworkError`), and requests that never got dispatched
    /// (`UnknownError`). No retry is attempted.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: RequestPayload,
        options: RequestOptions,
    ) -> Result<TransportResponse, ApiError> {
        let url = self.build_url(path, &options.query);
        let mut request = TransportRequest::new(method, url.clone());
        request.body = body;
        request.timeout = options.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if matches!(request.body, RequestPayload::Json(_)) && !request.has_header("content-type") {
            request
                .headers
                .push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        for stage in &self.request_chain {
            request = stage.intercept(request).await;
        }

        tracing::debug!(method = method.as_str(), %url, "dispatching api request");
        let mut outcome = match self.transport.execute(request).await {
            Ok(response) => Ok(response),
            Err(err) if err.is_network() => Err(ApiError::network(&url)),
            Err(err) => Err(ApiError::request(&url, Some(&err.to_string()))),
        };

        for stage in &self.response_chain {
            outcome = stage.intercept(outcome).await;
        }
        outcome
    }

    /// GET convenience wrapper.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn get(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<TransportResponse, ApiError> {
        self.request(HttpMethod::Get, path, RequestPayload::Empty, options)
            .await
    }

    /// POST convenience wrapper. `None` sends an empty body.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<TransportResponse, ApiError> {
        let payload = body.map_or(RequestPayload::Empty, RequestPayload::Json);
        self.request(HttpMethod::Post, path, payload, RequestOptions::default())
            .await
    }

    /// PATCH convenience wrapper. `None` sends an empty body.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn patch(
        &self,
        path: &str,
        body: Option<Value>,
    ) -> Result<TransportResponse, ApiError> {
        let payload = body.map_or(RequestPayload::Empty, RequestPayload::Json);
        self.request(HttpMethod::Patch, path, payload, RequestOptions::default())
            .await
    }

    /// DELETE convenience wrapper.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn delete(&self, path: &str) -> Result<TransportResponse, ApiError> {
        self.request(
            HttpMethod::Delete,
            path,
            RequestPayload::Empty,
            RequestOptions::default(),
        )
        .await
    }

    /// Multipart file upload with the 10 minute timeout.
    ///
    /// # Errors
    /// See [`ApiClient::request`].
    pub async fn post_multipart(
        &self,
        path: &str,
        field_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<TransportResponse, ApiError> {
        self.request(
            HttpMethod::Post,
            path,
            RequestPayload::Multipart {
                field_name: field_name.to_owned(),
                file_name: file_name.to_owned(),
                bytes,
            },
            RequestOptions {
                timeout: Some(UPLOAD_TIMEOUT),
                query: Vec::new(),
            },
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::{CredentialKey, TransportError};
    use crate::testing::{FailingTransport, MemoryCredentialStore, RecordingNotifier, StaticTransport};
    use oship_domain::ApiErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn client_over(
        transport: Arc<StaticTransport>,
        store: Arc<MemoryCredentialStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> ApiClient {
        ApiClient::new(transport, store, notifier, ApiConfig::default())
    }

    #[tokio::test]
    async fn test_bearer_token_attached_from_store() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(200, &json!({"ok": true})).await;
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .set(CredentialKey::AccessToken, "abc")
            .await
            .unwrap();

        let client = client_over(
            Arc::clone(&transport),
            store,
            Arc::new(RecordingNotifier::new()),
        );
        client.get("/v1/orders", RequestOptions::default()).await.unwrap();

        let sent = transport.requests().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_request_proceeds_without_token() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(200, &json!({"ok": true})).await;

        let client = client_over(
            Arc::clone(&transport),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(RecordingNotifier::new()),
        );
        let result = client.get("/v1/orders", RequestOptions::default()).await;

        assert!(result.is_ok());
        assert!(!transport.requests().await[0].has_header("authorization"));
    }

    #[tokio::test]
    async fn test_url_built_from_base_and_query() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(200, &json!([])).await;

        let client = client_over(
            Arc::clone(&transport),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(RecordingNotifier::new()),
        );
        let options =
            RequestOptions::with_query(vec![("page".to_owned(), "2".to_owned())]);
        client.get("/v1/orders", options).await.unwrap();

        assert_eq!(
            transport.requests().await[0].url,
            "http://localhost:5173/api/v1/orders?page=2"
        );
    }

    #[tokio::test]
    async fn test_json_body_gets_content_type() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(201, &json!({"id": 1})).await;

        let client = client_over(
            Arc::clone(&transport),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(RecordingNotifier::new()),
        );
        client
            .post("/v1/orders", Some(json!({"sku": "A-1"})))
            .await
            .unwrap();

        assert_eq!(
            transport.requests().await[0].header("content-type"),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_404_notifies_with_path_and_returns_not_found() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(404, &json!({})).await;
        let notifier = Arc::new(RecordingNotifier::new());

        let client = client_over(
            Arc::clone(&transport),
            Arc::new(MemoryCredentialStore::new()),
            Arc::clone(&notifier),
        );
        let error = client
            .get("/v1/orders/999", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(error.kind, ApiErrorKind::NotFound);
        assert_eq!(error.status, Some(404));
        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("/v1/orders/999"));
    }

    #[tokio::test]
    async fn test_401_returns_silently_and_touches_no_storage() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(401, &json!({})).await;
        let store = Arc::new(MemoryCredentialStore::new());
        store
            .set(CredentialKey::AccessToken, "stale")
            .await
            .unwrap();
        let notifier = Arc::new(RecordingNotifier::new());

        let client = client_over(Arc::clone(&transport), Arc::clone(&store), Arc::clone(&notifier));
        let error = client
            .get("/v1/orders", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(error.kind, ApiErrorKind::Unauthorized);
        assert!(notifier.messages().is_empty());
        assert_eq!(
            store.get(CredentialKey::AccessToken).await.unwrap().as_deref(),
            Some("stale")
        );
    }

    #[tokio::test]
    async fn test_timeout_maps_to_network_error() {
        let transport = Arc::new(FailingTransport::new(TransportError::Timeout {
            timeout_ms: 10_000,
        }));
        let notifier = Arc::new(RecordingNotifier::new());

        let client = ApiClient::new(
            transport,
            Arc::new(MemoryCredentialStore::new()),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
            ApiConfig::default(),
        );
        let error = client
            .get("/v1/orders", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(error.kind, ApiErrorKind::NetworkError);
        assert_eq!(error.status, None);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_unformed_request_maps_to_unknown_error() {
        let transport = Arc::new(FailingTransport::new(TransportError::Request(
            "invalid header".to_owned(),
        )));

        let client = ApiClient::new(
            transport,
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(RecordingNotifier::new()),
            ApiConfig::default(),
        );
        let error = client
            .get("/v1/orders", RequestOptions::default())
            .await
            .unwrap_err();

        assert_eq!(error.kind, ApiErrorKind::UnknownError);
    }

    #[tokio::test]
    async fn test_multipart_upload_uses_long_timeout() {
        let transport = Arc::new(StaticTransport::new());
        transport.enqueue_json(200, &json!({"rows": 10})).await;

        let client = client_over(
            Arc::clone(&transport),
            Arc::new(MemoryCredentialStore::new()),
            Arc::new(RecordingNotifier::new()),
        );
        client
            .post_multipart("/v1/orders/upload", "file", "orders.xlsx", vec![1, 2, 3])
            .await
            .unwrap();

        let sent = transport.requests().await;
        assert_eq!(sent[0].timeout, UPLOAD_TIMEOUT);
        assert!(matches!(sent[0].body, RequestPayload::Multipart { .. }));
    }
}
