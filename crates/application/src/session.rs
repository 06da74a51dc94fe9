//! Session manager: the single source of truth for authentication state.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tokio::sync::RwLock;

use oship_domain::{ApiError, LoginPayload, Session, ShapeError, UserProfile,
    access_token_from_response};

use crate::api::AuthApi;
use crate::client::ApiClient;
use crate::ports::{CredentialKey, CredentialStore, StorageError};

/// Errors produced by session operations, composed from the HTTP and
/// storage layers plus the login-response shape failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The server returned an empty or undecodable response body.
    #[error("the server returned an empty or malformed response")]
    InvalidResponseShape,
    /// The response carried no access token under any accepted field name.
    #[error("no access token received from the server")]
    MissingToken,
    /// Refresh was requested but no refresh token is held.
    #[error("no refresh token available")]
    NoRefreshToken,
    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// Credential storage failed.
    #[error("credential storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl From<ShapeError> for AuthError {
    fn from(err: ShapeError) -> Self {
        match err {
            ShapeError::EmptyBody => Self::InvalidResponseShape,
            ShapeError::MissingToken => Self::MissingToken,
        }
    }
}

/// Login form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    /// Seller email.
    pub email: String,
    /// Plain-text password, sent over TLS.
    pub password: String,
}

/// Owns the in-memory [`Session`] and every write to the credential store.
///
/// All other components derive authentication state from here (or, for the
/// navigation guard, from the store this manager writes). Mutating
/// operations must be serialized by the caller: two overlapping `login`,
/// `logout`, or `refresh_access_token` calls race on the credential store
/// with last-write-wins semantics.
pub struct SessionManager {
    session: RwLock<Session>,
    auth: AuthApi,
    store: Arc<dyn CredentialStore>,
}

impl SessionManager {
    /// Creates a manager with an empty session.
    #[must_use]
    pub fn new(client: Arc<ApiClient>, store: Arc<dyn CredentialStore>) -> Self {
        Self {
            session: RwLock::new(Session::new()),
            auth: AuthApi::new(client),
            store,
        }
    }

    /// Creates a manager rehydrated from durable storage, as on app
    /// bootstrap after a full reload.
    ///
    /// A corrupt stored profile is discarded rather than treated as fatal.
    ///
    /// # Errors
    /// Returns [`StorageError`] when a slot cannot be read.
    pub async fn restore(
        client: Arc<ApiClient>,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, StorageError> {
        let access_token = store.get(CredentialKey::AccessToken).await?;
        let refresh_token = store.get(CredentialKey::RefreshToken).await?;
        let user = match store.get(CredentialKey::UserProfile).await? {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(%err, "discarding corrupt stored profile");
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            session: RwLock::new(Session {
                access_token,
                refresh_token,
                user,
            }),
            auth: AuthApi::new(client),
            store,
        })
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Derived from the in-memory access token; never stored separately.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Signs the seller in.
    ///
    /// On success the token, refresh token (when issued), and profile are
    /// persisted in that order, then committed to memory; the call returns
    /// only after all writes complete. When the response omits a profile, a
    /// placeholder is synthesized from the submitted email so the session
    /// stays usable.
    ///
    /// # Errors
    /// - [`AuthError::InvalidResponseShape`] for an empty response body.
    /// - [`AuthError::MissingToken`] when no token field is present; memory
    ///   and storage are left untouched.
    /// - [`AuthError::Api`] / [`AuthError::Storage`] from the layers below.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        let body = self
            .auth
            .login(json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .await?;

        let payload = LoginPayload::from_response(&body)?;
        let user = payload.user.unwrap_or_else(|| {
            tracing::warn!("login response carried no profile; synthesizing fallback");
            UserProfile::fallback(credentials.email.clone())
        });

        // Token first so the authenticated state is durable as early as
        // possible; profile last.
        self.store
            .set(CredentialKey::AccessToken, &payload.access_token)
            .await?;
        if let Some(refresh_token) = &payload.refresh_token {
            self.store
                .set(CredentialKey::RefreshToken, refresh_token)
                .await?;
        }
        let serialized = serde_json::to_string(&user)
            .map_err(|err| StorageError::Corrupt(err.to_string()))?;
        self.store
            .set(CredentialKey::UserProfile, &serialized)
            .await?;

        let mut session = self.session.write().await;
        session.access_token = Some(payload.access_token);
        session.refresh_token = payload.refresh_token;
        session.user = Some(user);
        Ok(())
    }

    /// Signs the seller out. Never fails visibly.
    ///
    /// The logout request is best-effort: whether it succeeds, fails, or
    /// times out, the in-memory session and all three storage slots are
    /// cleared. Failures are logged and swallowed.
    pub async fn logout(&self) {
        let had_token = self.session.read().await.access_token.is_some();
        if had_token {
            if let Err(err) = self.auth.logout().await {
                tracing::warn!(%err, "logout request failed; clearing session anyway");
            }
        }

        self.session.write().await.clear();
        if let Err(err) = self.store.clear_all().await {
            tracing::warn!(%err, "failed to clear credential storage on logout");
        }
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// On success only the access token changes; the refresh token and
    /// profile are untouched. Any failure tears the whole session down
    /// (full [`SessionManager::logout`]) before the original error is
    /// propagated: callers must expect session loss as a consequence of a
    /// failed refresh, not just an error value.
    ///
    /// # Errors
    /// - [`AuthError::NoRefreshToken`] when no refresh token is held.
    /// - [`AuthError::Api`] / [`AuthError::MissingToken`] /
    ///   [`AuthError::Storage`] from the refresh attempt itself.
    pub async fn refresh_access_token(&self) -> Result<String, AuthError> {
        match self.try_refresh().await {
            Ok(token) => Ok(token),
            Err(err) => {
                tracing::warn!(%err, "token refresh failed; logging out");
                self.logout().await;
                Err(err)
            }
        }
    }

    async fn try_refresh(&self) -> Result<String, AuthError> {
        if self.session.read().await.refresh_token.is_none() {
            return Err(AuthError::NoRefreshToken);
        }

        let body = self.auth.refresh().await?;
        let token = access_token_from_response(&body)?;

        self.store.set(CredentialKey::AccessToken, &token).await?;
        self.session.write().await.access_token = Some(token.clone());
        Ok(token)
    }
}
