//! O-Ship Seller Client - Main Entry Point
//!
//! Wires the infrastructure adapters into the application core, restores
//! any persisted session, and evaluates the launch route. The visual
//! dashboard sits on top of the pieces assembled here.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oship_application::{ApiClient, NavigationGuard, SessionManager};
use oship_domain::{ApiConfig, ApiEnvironment, HOME_ROUTE};
use oship_infrastructure::{FileCredentialStore, ReqwestTransport, TracingNotifier};

/// Builds the client configuration from the process environment.
fn config_from_env() -> ApiConfig {
    let mut config = ApiConfig::default();
    if let Ok(name) = std::env::var("OSHIP_ENV") {
        config.environment = ApiEnvironment::from_name(&name);
    }
    if let Ok(host) = std::env::var("OSHIP_API_BASE_URL") {
        config.api_base_url = Some(host);
    }
    if let Ok(origin) = std::env::var("OSHIP_PROXY_ORIGIN") {
        config.proxy_origin = origin;
    }
    config
}

/// Directory the credential slots are persisted in.
fn data_dir() -> PathBuf {
    std::env::var_os("OSHIP_DATA_DIR").map_or_else(
        || {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("oship")
        },
        PathBuf::from,
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config_from_env();
    tracing::info!(
        environment = ?config.environment,
        base_url = %config.base_url(),
        "starting seller client"
    );

    let transport = Arc::new(ReqwestTransport::new()?);
    let store = Arc::new(FileCredentialStore::new(data_dir()));
    let notifier = Arc::new(TracingNotifier::new());

    let client = Arc::new(ApiClient::new(
        transport,
        Arc::clone(&store) as _,
        notifier,
        config,
    ));
    let session = SessionManager::restore(client, Arc::clone(&store) as _).await?;
    let guard = NavigationGuard::new(store);

    tracing::info!(
        authenticated = session.is_authenticated().await,
        "session restored from storage"
    );
    let decision = guard.decide(HOME_ROUTE).await;
    tracing::info!(?decision, "launch route decision");

    Ok(())
}
