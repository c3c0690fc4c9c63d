//! Shared helpers for HTTP integration tests

use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use medialink_api::http::{create_router, AppState};
use medialink_core::auth::SharedSecretVerifier;
use medialink_core::cache::ResolutionCache;
use medialink_core::config::{AuthConfig, ResolverConfig, ServerConfig};
use medialink_core::models::{Alias, MediaRecord};
use medialink_core::registry::{MediaStore, MemoryRegistry, Registry};
use medialink_core::resolver::OriginResolver;

pub const TEST_SECRET: &str = "test-secret";

/// Build the full router on top of an in-memory registry.
pub fn test_app(registry: Arc<MemoryRegistry>) -> Router {
    let registry: Arc<dyn Registry> = registry;
    let resolver_config = ResolverConfig::default();

    let store = MediaStore::new(registry.clone());
    let cache = ResolutionCache::new(registry, Duration::from_secs(60));
    let resolver =
        Arc::new(OriginResolver::new(cache, &resolver_config).expect("resolver build failed"));
    let verifier = Arc::new(SharedSecretVerifier::new(TEST_SECRET));

    let auth_config = AuthConfig {
        access_password: TEST_SECRET.to_string(),
        ..AuthConfig::default()
    };

    let state = AppState::new(
        store,
        resolver,
        verifier,
        &ServerConfig::default(),
        &auth_config,
        &resolver_config,
    )
    .expect("state build failed");

    create_router(state)
}

/// Seed a media record directly into the registry.
pub async fn seed_record(registry: &Arc<MemoryRegistry>, alias: &str, record: &MediaRecord) {
    let registry: Arc<dyn Registry> = registry.clone();
    MediaStore::new(registry)
        .put_record(&Alias::from_string(alias.to_string()), record)
        .await
        .expect("seeding record failed");
}
