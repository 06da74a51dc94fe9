//! Environment-driven client configuration.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for spreadsheet uploads.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(600);

/// Path prefix shared by every deployment.
const API_PREFIX: &str = "/api";
/// Origin of the local development proxy.
const DEFAULT_PROXY_ORIGIN: &str = "http://localhost:5173";

/// Deployment environment the client runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiEnvironment {
    /// Developer machine; the API is reached through the local proxy.
    Local,
    /// Shared development deployment, also proxied.
    Development,
    /// Production: requests go straight to the configured host.
    #[default]
    Production,
}

impl ApiEnvironment {
    /// Parses an environment name. Unrecognized names mean production.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    /// True for the proxied environments.
    #[must_use]
    pub const fn is_proxied(self) -> bool {
        matches!(self, Self::Local | Self::Development)
    }
}

/// Client configuration assembled once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Active environment.
    pub environment: ApiEnvironment,
    /// Configured API host for production (scheme + authority).
    pub api_base_url: Option<String>,
    /// Origin of the development proxy.
    pub proxy_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: ApiEnvironment::default(),
            api_base_url: None,
            proxy_origin: DEFAULT_PROXY_ORIGIN.to_owned(),
        }
    }
}

impl ApiConfig {
    /// Resolves the base URL every request path is joined onto.
    ///
    /// Local and development traffic goes through the proxy under the fixed
    /// `/api` prefix; production joins the prefix onto the configured host,
    /// falling back to the proxy origin when no host is configured.
    #[must_use]
    pub fn base_url(&self) -> String {
        let origin = if self.environment.is_proxied() {
            &self.proxy_origin
        } else {
            self.api_base_url.as_deref().unwrap_or(&self.proxy_origin)
        };
        format!("{}{API_PREFIX}", origin.trim_end_matches('/'))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(ApiEnvironment::from_name("local"), ApiEnvironment::Local);
        assert_eq!(ApiEnvironment::from_name("dev"), ApiEnvironment::Development);
        assert_eq!(
            ApiEnvironment::from_name("Development"),
            ApiEnvironment::Development
        );
        assert_eq!(
            ApiEnvironment::from_name("production"),
            ApiEnvironment::Production
        );
        assert_eq!(
            ApiEnvironment::from_name("anything-else"),
            ApiEnvironment::Production
        );
    }

    #[test]
    fn test_proxied_environments_use_proxy_origin() {
        let config = ApiConfig {
            environment: ApiEnvironment::Development,
            api_base_url: Some("https://api.oship.io".to_owned()),
            ..ApiConfig::default()
        };
        assert_eq!(config.base_url(), "http://localhost:5173/api");
    }

    #[test]
    fn test_production_uses_configured_host() {
        let config = ApiConfig {
            environment: ApiEnvironment::Production,
            api_base_url: Some("https://api.oship.io/".to_owned()),
            ..ApiConfig::default()
        };
        assert_eq!(config.base_url(), "https://api.oship.io/api");
    }

    #[test]
    fn test_production_without_host_falls_back_to_proxy() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:5173/api");
    }
}
