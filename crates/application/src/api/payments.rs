//! Payment endpoints.

use std::sync::Arc;

use serde_json::Value;

use oship_domain::ApiError;

use crate::client::{ApiClient, RequestOptions};

/// Request builders for the payment endpoints.
pub struct PaymentsApi {
    client: Arc<ApiClient>,
}

impl PaymentsApi {
    /// Creates the module over the shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// GET `/v1/payments`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn list(&self, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        self.client
            .get("/v1/payments", RequestOptions::with_query(query))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/payments/prepare`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn prepare(&self, data: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/payments/prepare", Some(data))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/payments/one-time`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn confirm_one_time(&self, data: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/payments/one-time", Some(data))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/payments/multi`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn confirm_multi(&self, data: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/payments/multi", Some(data))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/payments/{paymentKey}/cancel`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn cancel(&self, payment_key: &str, data: Value) -> Result<Value, ApiError> {
        self.client
            .post(&format!("/v1/payments/{payment_key}/cancel"), Some(data))
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/payments/orders/{orderId}`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn by_order(&self, order_id: &str) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/v1/payments/orders/{order_id}"),
                RequestOptions::default(),
            )
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/payments/mypayments`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn mine(&self) -> Result<Value, ApiError> {
        self.client
            .get("/v1/payments/mypayments", RequestOptions::default())
            .await
            .map(|response| response.json())
    }
}
