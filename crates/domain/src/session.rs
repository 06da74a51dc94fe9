//! Seller session state.

use serde::{Deserialize, Serialize};

use crate::user::UserProfile;

/// In-memory authentication state for a seller.
///
/// The session is owned by the session manager; everything else only reads
/// it. Whether a seller counts as authenticated is always derived from the
/// access token, never stored separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Session {
    /// Short-lived bearer token attached to API requests.
    pub access_token: Option<String>,
    /// Longer-lived token used to obtain a new access token.
    pub refresh_token: Option<String>,
    /// Profile of the signed-in seller.
    pub user: Option<UserProfile>,
}

impl Session {
    /// Creates an empty, unauthenticated session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            user: None,
        }
    }

    /// Returns true if an access token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Clears all fields, returning the session to the signed-out state.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_authenticated_iff_access_token_present() {
        let mut session = Session::new();
        session.refresh_token = Some("refresh".to_owned());
        session.user = Some(UserProfile::fallback("a@b.com"));
        assert!(!session.is_authenticated());

        session.access_token = Some("access".to_owned());
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut session = Session {
            access_token: Some("access".to_owned()),
            refresh_token: Some("refresh".to_owned()),
            user: Some(UserProfile::fallback("a@b.com")),
        };
        session.clear();
        assert_eq!(session, Session::new());
    }
}
