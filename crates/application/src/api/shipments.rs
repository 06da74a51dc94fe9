//! Shipment and tracking endpoints.

use std::sync::Arc;

use serde_json::Value;

use oship_domain::ApiError;

use crate::client::{ApiClient, RequestOptions};

/// Request builders for the shipping endpoints.
pub struct ShipmentsApi {
    client: Arc<ApiClient>,
}

impl ShipmentsApi {
    /// Creates the module over the shared client.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// POST `/v1/shipping/orders`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn create(&self, data: Value) -> Result<Value, ApiError> {
        self.client
            .post("/v1/shipping/orders", Some(data))
            .await
            .map(|response| response.json())
    }

    /// POST `/v1/shipping/orders/{orderId}/carriers/{carrierId}`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn assign_carrier(
        &self,
        order_id: &str,
        carrier_id: &str,
    ) -> Result<Value, ApiError> {
        self.client
            .post(
                &format!("/v1/shipping/orders/{order_id}/carriers/{carrier_id}"),
                None,
            )
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/shipping/shipment/{id}`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn get(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/v1/shipping/shipment/{id}"),
                RequestOptions::default(),
            )
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/shipping/barcode?barcode=...`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn validate_barcode(&self, barcode: &str) -> Result<Value, ApiError> {
        let query = vec![("barcode".to_owned(), barcode.to_owned())];
        self.client
            .get("/v1/shipping/barcode", RequestOptions::with_query(query))
            .await
            .map(|response| response.json())
    }

    /// PATCH `/v1/shipping/orders/{orderId}/barcode-printed`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn mark_barcode_printed(&self, order_id: &str) -> Result<Value, ApiError> {
        self.client
            .patch(
                &format!("/v1/shipping/orders/{order_id}/barcode-printed"),
                None,
            )
            .await
            .map(|response| response.json())
    }

    /// GET `/v1/shipping/orders/{orderId}/tracking-events`.
    ///
    /// # Errors
    /// Propagates any classified [`ApiError`].
    pub async fn tracking_events(&self, order_id: &str) -> Result<Value, ApiError> {
        self.client
            .get(
                &format!("/v1/shipping/orders/{order_id}/tracking-events"),
                RequestOptions::default(),
            )
            .await
            .map(|response| response.json())
    }
}
