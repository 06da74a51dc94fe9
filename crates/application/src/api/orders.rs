//! Order endpoints.

use std::sync::Arc;

use serde_json::Value;

use oship_domain::ApiError;

use crate::client::{ApiClient, RequestOptions};

/// Request builders for the order endpoints.
pub struct OrdersApi {
    client: Arc<ApiClient>,
}

impl OrdersApi {
    /// Creates the module over the shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET `/v1/orders`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn list(&self, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        self.client
            .get("/v1/orders", RequestOptions::with_query(query))
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/orders/{id}`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn get(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .get(&format!("/v1/orders/{id}"), RequestOptions::default())
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/orders`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn create(&self, data: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/orders", Some(data))
            .await
            .map(|response| response.json())
    }

    /// PATCH `/v1/orders/{id}`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn update(&self, id: &str, data: Value) -> Result<Value, ApiError> {
        self.client
            .patch(&format!("/v1/orders/{id}"), Some(data))
            .await
            .map(|response| response.json())
    }

    /// DELETE `/v1/orders/{id}`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .delete(&format!("/v1/orders/{id}"))
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/seller-stats/monthly`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn monthly_stats(&self, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        self.client
            .get("/v1/seller-stats/monthly", RequestOptions::with_query(query))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/orders/upload` (multipart spreadsheet, 10 minute timeout).
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn upload_spreadsheet(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<Value, ApiError> {
        self.client
            .post_multipart("/v1/orders/upload", "file", file_name, bytes)
            .await
            .map(|response| response.json())
    }
}
