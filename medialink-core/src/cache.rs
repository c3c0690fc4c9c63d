//! Resolution cache
//!
//! TTL-scoped mapping from alias to resolved direct URL, backed by the same
//! registry as the media records under a distinct keyspace. Expiry is
//! handled by the registry's native per-key TTL, so a stale entry simply
//! reads back as absent.
//!
//! Invariant: concurrent requests resolving the same expired alias may both
//! scrape and both write this key. Last write wins; both values derive from
//! the same source page, so the race is benign and no locking is used.

use std::sync::Arc;
use std::time::Duration;

use crate::registry::{Registry, RESOLVE_KEYSPACE};
use crate::models::Alias;
use crate::Result;

#[derive(Clone)]
pub struct ResolutionCache {
    registry: Arc<dyn Registry>,
    ttl: Duration,
}

impl ResolutionCache {
    #[must_use]
    pub fn new(registry: Arc<dyn Registry>, ttl: Duration) -> Self {
        Self { registry, ttl }
    }

    fn key(alias: &Alias) -> String {
        format!("{RESOLVE_KEYSPACE}{alias}")
    }

    /// Look up the cached resolved URL. Returns `None` once the TTL has
    /// elapsed.
    pub async fn get(&self, alias: &Alias) -> Result<Option<String>> {
        self.registry.get(&Self::key(alias)).await
    }

    /// Store a freshly resolved URL with the configured TTL.
    pub async fn put(&self, alias: &Alias, resolved_url: &str) -> Result<()> {
        self.registry
            .set(&Self::key(alias), resolved_url, Some(self.ttl))
            .await
    }
}

impl std::fmt::Debug for ResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionCache")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = ResolutionCache::new(
            Arc::new(MemoryRegistry::new()),
            Duration::from_secs(60),
        );
        let alias = Alias::sanitize("clip.mp4");

        assert!(cache.get(&alias).await.unwrap().is_none());
        cache.put(&alias, "https://download.example/x").await.unwrap();
        assert_eq!(
            cache.get(&alias).await.unwrap().as_deref(),
            Some("https://download.example/x")
        );
    }

    #[tokio::test]
    async fn test_entry_expires() {
        let cache = ResolutionCache::new(
            Arc::new(MemoryRegistry::new()),
            Duration::from_millis(30),
        );
        let alias = Alias::sanitize("clip.mp4");

        cache.put(&alias, "https://download.example/x").await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(cache.get(&alias).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = ResolutionCache::new(
            Arc::new(MemoryRegistry::new()),
            Duration::from_secs(60),
        );
        let alias = Alias::sanitize("clip.mp4");

        cache.put(&alias, "https://download.example/a").await.unwrap();
        cache.put(&alias, "https://download.example/b").await.unwrap();
        assert_eq!(
            cache.get(&alias).await.unwrap().as_deref(),
            Some("https://download.example/b")
        );
    }
}
