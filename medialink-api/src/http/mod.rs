// Module: http
// Streaming proxy, alias creation, and dashboard routes

pub mod error;
pub mod health;
pub mod media;
pub mod middleware;
pub mod proxy;
pub mod public;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use medialink_core::auth::CredentialVerifier;
use medialink_core::config::{AuthConfig, ResolverConfig, ServerConfig};
use medialink_core::registry::MediaStore;
use medialink_core::resolver::OriginResolver;
use medialink_core::Error;

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MediaStore,
    pub resolver: Arc<OriginResolver>,
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Client for outbound media fetches. Connect and first-byte reads are
    /// bounded, but there is no total timeout: that would cap how long a
    /// client may stream.
    pub proxy_client: reqwest::Client,
    pub auth: AuthConfig,
    pub indirect_hosts: Vec<String>,
    pub public_base_url: Option<String>,
}

impl AppState {
    pub fn new(
        store: MediaStore,
        resolver: Arc<OriginResolver>,
        verifier: Arc<dyn CredentialVerifier>,
        server_config: &ServerConfig,
        auth_config: &AuthConfig,
        resolver_config: &ResolverConfig,
    ) -> Result<Self, Error> {
        let proxy_client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(resolver_config.connect_timeout_seconds))
            .read_timeout(Duration::from_secs(resolver_config.request_timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            store,
            resolver,
            verifier,
            proxy_client,
            auth: auth_config.clone(),
            indirect_hosts: resolver_config.indirect_hosts.clone(),
            public_base_url: server_config.public_base_url.clone(),
        })
    }
}

/// Create the HTTP router with all routes
///
/// Static routes take precedence over the `/{alias}` capture, so `/health`,
/// `/login`, and `/create` are never shadowed by an alias.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(public::index))
        .route("/login", post(public::login))
        .route("/create", post(media::create_alias))
        .merge(health::create_health_router())
        // `get` also matches HEAD; the handler branches on the method.
        .route("/{alias}", get(proxy::serve_media))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
