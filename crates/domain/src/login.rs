//! Login and refresh response normalization.
//!
//! The backend wraps authentication payloads inconsistently: a `data`
//! envelope may be present or absent, the access token arrives as
//! `accessToken` or `token`, and the profile sits under `user`, `seller`,
//! or at the top level. Every accepted shape is enumerated here so the rest
//! of the client never probes response fields ad hoc.

use serde_json::Value;
use thiserror::Error;

use crate::user::UserProfile;

/// Errors produced while normalizing an authentication response body.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// The response carried no decodable body.
    #[error("empty or undecodable response body")]
    EmptyBody,
    /// No access token under any accepted field name.
    #[error("no access token in response (expected `accessToken` or `token`)")]
    MissingToken,
}

/// Canonical form of a successful login response.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginPayload {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Refresh token, when the backend issued one.
    pub refresh_token: Option<String>,
    /// Seller profile, when the backend included one.
    pub user: Option<UserProfile>,
}

impl LoginPayload {
    /// Normalizes a login response body.
    ///
    /// # Errors
    /// - [`ShapeError::EmptyBody`] if the body is null.
    /// - [`ShapeError::MissingToken`] if no token field is present.
    pub fn from_response(body: &Value) -> Result<Self, ShapeError> {
        if body.is_null() {
            return Err(ShapeError::EmptyBody);
        }
        let payload = unwrap_envelope(body);
        let access_token = token_of(payload).ok_or(ShapeError::MissingToken)?;
        let refresh_token = payload
            .get("refreshToken")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self {
            access_token,
            refresh_token,
            user: extract_profile(payload),
        })
    }
}

/// Extracts a fresh access token from a refresh response, using the same
/// envelope and field-name tolerance as login.
///
/// # Errors
/// - [`ShapeError::EmptyBody`] if the body is null.
/// - [`ShapeError::MissingToken`] if no token field is present.
pub fn access_token_from_response(body: &Value) -> Result<String, ShapeError> {
    if body.is_null() {
        return Err(ShapeError::EmptyBody);
    }
    token_of(unwrap_envelope(body)).ok_or(ShapeError::MissingToken)
}

/// Unwraps the optional `data` envelope, if present as an object.
fn unwrap_envelope(body: &Value) -> &Value {
    match body.get("data") {
        Some(data) if data.is_object() => data,
        _ => body,
    }
}

/// Reads the access token from its accepted field names, in priority order.
fn token_of(payload: &Value) -> Option<String> {
    ["accessToken", "token"]
        .iter()
        .find_map(|key| payload.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

/// Picks the profile out of its accepted locations, in priority order:
/// `user`, then `seller`, then the payload itself. A candidate counts as a
/// profile only if it carries an `id` or a non-empty `email`.
fn extract_profile(payload: &Value) -> Option<UserProfile> {
    let candidate = [payload.get("user"), payload.get("seller")]
        .into_iter()
        .flatten()
        .find(|value| value.is_object())
        .unwrap_or(payload);

    if !has_identity(candidate) {
        return None;
    }
    serde_json::from_value(candidate.clone()).ok()
}

fn has_identity(value: &Value) -> bool {
    value.get("id").is_some_and(|id| !id.is_null())
        || value
            .get("email")
            .and_then(Value::as_str)
            .is_some_and(|email| !email.is_empty())
}
