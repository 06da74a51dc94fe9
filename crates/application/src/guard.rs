//! Navigation guard.

use std::sync::Arc;

use oship_domain::{GuardDecision, RouteAccess, route_access};

use crate::ports::{CredentialKey, CredentialStore};

/// Gate evaluated before every route transition.
///
/// The guard intentionally reads durable storage rather than the in-memory
/// session: right after a full reload the in-memory state has not been
/// rehydrated yet, and a partial write (token without profile, or vice
/// versa) must count as unauthenticated. Both the token and the profile
/// slot have to be present.
pub struct NavigationGuard {
    store: Arc<dyn CredentialStore>,
}

impl NavigationGuard {
    /// Creates a guard over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Decides the transition to `target_path`.
    ///
    /// When an unauthenticated session targets a protected route, any stale
    /// or partial credential slots are cleared before redirecting to login.
    pub async fn decide(&self, target_path: &str) -> GuardDecision {
        let access = route_access(target_path);
        let is_authenticated = self.read_through_auth().await;
        let decision = GuardDecision::evaluate(access, is_authenticated);

        if matches!(access, RouteAccess::Protected) && !is_authenticated {
            tracing::debug!(target_path, "unauthenticated; clearing stale credentials");
            if let Err(err) = self.store.clear_all().await {
                tracing::warn!(%err, "failed to clear stale credentials");
            }
        }
        decision
    }

    /// Authoritative check against durable storage. Read errors count as
    /// unauthenticated.
    async fn read_through_auth(&self) -> bool {
        let token = self
            .store
            .get(CredentialKey::AccessToken)
            .await
            .ok()
            .flatten();
        let user = self
            .store
            .get(CredentialKey::UserProfile)
            .await
            .ok()
            .flatten();
        token.is_some_and(|t| !t.is_empty()) && user.is_some_and(|u| !u.is_empty())
    }
}
