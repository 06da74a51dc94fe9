//! O-Ship Seller Client Domain - Core business types
//!
//! This crate defines the domain model for the seller dashboard client.
//! All types here are pure Rust with no I/O dependencies: session state,
//! login-response normalization, the API error taxonomy, the route table,
//! and environment-driven configuration.

pub mod config;
pub mod error;
pub mod login;
pub mod route;
pub mod session;
pub mod user;

pub use config::{ApiConfig, ApiEnvironment, DEFAULT_TIMEOUT, UPLOAD_TIMEOUT};
pub use error::{ApiError, ApiErrorKind};
pub use login::{LoginPayload, ShapeError, access_token_from_response};
pub use route::{
    GuardDecision, HOME_ROUTE, LOGIN_ROUTE, ROUTES, RouteAccess, RouteDescriptor, route_access,
};
pub use session::Session;
pub use user::UserProfile;
