//! Seller profile types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier used for the synthesized fallback profile.
const FALLBACK_ID: i64 = 1;
/// Display name used for the synthesized fallback profile.
const FALLBACK_NAME: &str = "Seller";

/// Profile of the signed-in seller.
///
/// Only the identity fields are interpreted by the client; anything else the
/// backend sends is carried opaquely in `extra` and survives a round trip
/// through persistent storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend identifier.
    #[serde(default)]
    pub id: i64,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Fields the client does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Synthesizes a placeholder profile for the given email.
    ///
    /// Used when a login response omits the profile entirely. The session
    /// stays usable (fail-open), at the cost of masking the missing data.
    #[must_use]
    pub fn fallback(email: impl Into<String>) -> Self {
        Self {
            id: FALLBACK_ID,
            email: email.into(),
            name: FALLBACK_NAME.to_owned(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fallback_profile() {
        let profile = UserProfile::fallback("seller@oship.io");
        assert_eq!(profile.id, 1);
        assert_eq!(profile.email, "seller@oship.io");
        assert_eq!(profile.name, "Seller");
        assert!(profile.extra.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "id": 42,
            "email": "seller@oship.io",
            "name": "Jin",
            "businessNumber": "123-45-67890"
        });
        let profile: UserProfile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.id, 42);
        assert_eq!(profile.extra.get("businessNumber"), raw.get("businessNumber"));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_missing_identity_fields_default() {
        let profile: UserProfile =
            serde_json::from_value(serde_json::json!({ "email": "x@y.z" })).unwrap();
        assert_eq!(profile.id, 0);
        assert_eq!(profile.name, "");
    }
}
