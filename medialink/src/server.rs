//! Server lifecycle management
//!
//! Wires the registry, resolver, and HTTP router together and serves until
//! a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use medialink_api::http::{create_router, AppState};
use medialink_core::auth::SharedSecretVerifier;
use medialink_core::cache::ResolutionCache;
use medialink_core::registry::{MediaStore, RedisRegistry, Registry};
use medialink_core::resolver::OriginResolver;
use medialink_core::Config;

/// Build shared services and run the HTTP server until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let registry: Arc<dyn Registry> = Arc::new(RedisRegistry::open(
        &config.redis.url,
        config.redis.key_prefix.clone(),
    )?);

    let store = MediaStore::new(registry.clone());
    let cache = ResolutionCache::new(
        registry,
        Duration::from_secs(config.resolver.cache_ttl_seconds),
    );
    let resolver = Arc::new(OriginResolver::new(cache, &config.resolver)?);
    let verifier = Arc::new(SharedSecretVerifier::new(
        config.auth.access_password.clone(),
    ));

    let state = AppState::new(
        store,
        resolver,
        verifier,
        &config.server,
        &config.auth,
        &config.resolver,
    )?;

    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.http_address()).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
