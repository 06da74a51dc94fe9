//! Authentication endpoints.

use std::sync::Arc;

use serde_json::Value;

use oship_domain::ApiError;

use crate::client::{ApiClient, RequestOptions};

/// Request builders for the auth endpoints.
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// Creates the module over the shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST `/v1/auth/login`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn login(&self, credentials: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/auth/login", Some(credentials))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/auth/logout`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.client
            .post("/v1/auth/logout", None)
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/auth/refresh`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn refresh(&self) -> Result<Value, ApiError> {
        self.client
            .post("/v1/auth/refresh", None)
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/sellers`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn seller_info(&self) -> Result<Value, ApiError> {
        self.client
            .get("/v1/sellers", RequestOptions::default())
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/auth/sellers/signup`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn signup(&self, data: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/auth/sellers/signup", Some(data))
            .await
            .map(|response| response.json())
    }
}
