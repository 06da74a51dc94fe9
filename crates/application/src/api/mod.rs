//! Domain API modules.
//!
//! Thin per-resource request builders layered on [`crate::ApiClient`]. No
//! logic lives here beyond paths, query parameters, and body pass-through;
//! interception, classification, and notification all happen in the client.

mod auth;
mod carriers;
mod orders;
mod payments;
mod shipments;

pub use auth::AuthApi;
pub use carriers::CarriersApi;
pub use orders::OrdersApi;
pub use payments::PaymentsApi;
pub use shipments::ShipmentsApi;
