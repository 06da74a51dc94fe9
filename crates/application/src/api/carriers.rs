//! Carrier endpoints.

use std::sync::Arc;

use serde_json::Value;

use oship_domain::ApiError;

use crate::client::{ApiClient, RequestOptions};

/// Request builders for the carrier endpoints.
pub struct CarriersApi {
    client: Arc<ApiClient>,
}

impl CarriersApi {
    /// Creates the module over the shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET `/v1/carriers`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.client
            .get("/v1/carriers", RequestOptions::default())
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/carriers/rates`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn rates(&self, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        self.client
            .get("/v1/carriers/rates", RequestOptions::with_query(query))
            .await
            .map(|response| response.json())
    }
}
