//! Origin resolver
//!
//! Turns a `MediaRecord` into a concrete, fetchable URL. Direct records
//! pass through untouched; indirect records are resolved by scraping the
//! hosting provider's landing page, with resolved links cached under a
//! fixed TTL so the expensive scrape happens at most once per TTL window.

pub mod error;
pub mod extract;

pub use error::ResolveError;

use std::time::Duration;

use crate::cache::ResolutionCache;
use crate::config::ResolverConfig;
use crate::models::{Alias, MediaKind, MediaRecord};
use crate::Error;

/// Browser-like User-Agent for landing page fetches; hosting providers may
/// reject non-browser clients.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

pub struct OriginResolver {
    cache: ResolutionCache,
    client: reqwest::Client,
}

impl OriginResolver {
    /// Build a resolver with bounded fetch timeouts.
    pub fn new(cache: ResolutionCache, config: &ResolverConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { cache, client })
    }

    /// Resolve a record to a fetchable URL.
    ///
    /// Direct records return their source URL verbatim with no network call
    /// and no cache write. Indirect records consult the resolution cache
    /// first; only on a miss is the landing page fetched and scraped.
    pub async fn resolve(
        &self,
        alias: &Alias,
        record: &MediaRecord,
    ) -> Result<String, ResolveError> {
        match record.kind {
            MediaKind::Direct => Ok(record.source_url.clone()),
            MediaKind::Indirect => self.resolve_indirect(alias, record).await,
        }
    }

    async fn resolve_indirect(
        &self,
        alias: &Alias,
        record: &MediaRecord,
    ) -> Result<String, ResolveError> {
        if let Some(cached) = self.cache.get(alias).await? {
            tracing::debug!(alias = %alias, "Resolution cache hit");
            return Ok(cached);
        }

        let link = self.scrape_download_link(&record.source_url).await?;

        // A failed cache write is not fatal: the link itself is still good,
        // the next request just scrapes again.
        if let Err(e) = self.cache.put(alias, &link).await {
            tracing::warn!(alias = %alias, error = %e, "Failed to cache resolved link");
        }

        Ok(link)
    }

    /// Fetch the landing page and scan it for a download link.
    async fn scrape_download_link(&self, page_url: &str) -> Result<String, ResolveError> {
        let response = self
            .client
            .get(page_url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| ResolveError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Fetch(format!(
                "Origin page returned status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Fetch(e.to_string()))?;

        let link = extract::extract_download_link(&body).ok_or(ResolveError::LinkNotFound)?;

        tracing::info!(page_url = %page_url, "Scraped download link from origin page");
        Ok(link.to_string())
    }
}

impl std::fmt::Debug for OriginResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OriginResolver").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{MemoryRegistry, Registry, RESOLVE_KEYSPACE};
    use std::sync::Arc;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const HOSTS: &[&str] = &["mediafire.com"];

    fn hosts() -> Vec<String> {
        HOSTS.iter().map(|h| (*h).to_string()).collect()
    }

    fn make_resolver(registry: Arc<MemoryRegistry>) -> OriginResolver {
        let cache = ResolutionCache::new(registry, Duration::from_secs(60));
        OriginResolver::new(cache, &ResolverConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_direct_record_passes_through_without_caching() {
        let registry = Arc::new(MemoryRegistry::new());
        let resolver = make_resolver(registry.clone());
        let alias = Alias::sanitize("movie.mp4");
        let record = MediaRecord::classify("https://cdn.example/movie.mp4", &hosts());

        let resolved = resolver.resolve(&alias, &record).await.unwrap();

        assert_eq!(resolved, "https://cdn.example/movie.mp4");
        let cache_key = format!("{RESOLVE_KEYSPACE}{alias}");
        assert!(registry.get(&cache_key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_indirect_scrape_populates_cache() {
        let page_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file/abc"))
            .and(header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<a aria-label="Download file" href="https://download.example/x">DL</a>"#,
            ))
            .expect(1)
            .mount(&page_server)
            .await;

        let registry = Arc::new(MemoryRegistry::new());
        let resolver = make_resolver(registry.clone());
        let alias = Alias::sanitize("clip.mp4");
        let record = MediaRecord {
            source_url: format!("{}/file/abc", page_server.uri()),
            kind: MediaKind::Indirect,
            views: 0,
        };

        let resolved = resolver.resolve(&alias, &record).await.unwrap();
        assert_eq!(resolved, "https://download.example/x");

        // Second resolution must be served from the cache: the page mock
        // above only tolerates a single hit.
        let resolved = resolver.resolve(&alias, &record).await.unwrap();
        assert_eq!(resolved, "https://download.example/x");
    }

    #[tokio::test]
    async fn test_unexpired_cache_entry_skips_scraping() {
        let page_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&page_server)
            .await;

        let registry = Arc::new(MemoryRegistry::new());
        let alias = Alias::sanitize("clip.mp4");
        registry
            .set(
                &format!("{RESOLVE_KEYSPACE}{alias}"),
                "https://download.example/cached",
                None,
            )
            .await
            .unwrap();

        let resolver = make_resolver(registry);
        let record = MediaRecord {
            source_url: format!("{}/file/abc", page_server.uri()),
            kind: MediaKind::Indirect,
            views: 0,
        };

        let resolved = resolver.resolve(&alias, &record).await.unwrap();
        assert_eq!(resolved, "https://download.example/cached");
    }

    #[tokio::test]
    async fn test_expired_cache_entry_triggers_rescrape() {
        let page_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/file/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<a id="downloadButton" href="https://download.example/fresh">DL</a>"#,
            ))
            .expect(1)
            .mount(&page_server)
            .await;

        let registry = Arc::new(MemoryRegistry::new());
        let alias = Alias::sanitize("clip.mp4");
        registry
            .set(
                &format!("{RESOLVE_KEYSPACE}{alias}"),
                "https://download.example/stale",
                Some(Duration::from_millis(20)),
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let resolver = make_resolver(registry);
        let record = MediaRecord {
            source_url: format!("{}/file/abc", page_server.uri()),
            kind: MediaKind::Indirect,
            views: 0,
        };

        let resolved = resolver.resolve(&alias, &record).await.unwrap();
        assert_eq!(resolved, "https://download.example/fresh");
    }

    #[tokio::test]
    async fn test_unrecognized_page_is_link_not_found() {
        let page_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body>File removed.</body></html>"),
            )
            .mount(&page_server)
            .await;

        let registry = Arc::new(MemoryRegistry::new());
        let resolver = make_resolver(registry.clone());
        let alias = Alias::sanitize("clip.mp4");
        let record = MediaRecord {
            source_url: page_server.uri(),
            kind: MediaKind::Indirect,
            views: 0,
        };

        let err = resolver.resolve(&alias, &record).await.unwrap_err();
        assert!(matches!(err, ResolveError::LinkNotFound));

        // A failed scrape must not leave a cache entry behind.
        let cache_key = format!("{RESOLVE_KEYSPACE}{alias}");
        assert!(registry.get(&cache_key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_page_fetch_error_is_fetch_failure() {
        let page_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&page_server)
            .await;

        let registry = Arc::new(MemoryRegistry::new());
        let resolver = make_resolver(registry);
        let alias = Alias::sanitize("clip.mp4");
        let record = MediaRecord {
            source_url: page_server.uri(),
            kind: MediaKind::Indirect,
            views: 0,
        };

        let err = resolver.resolve(&alias, &record).await.unwrap_err();
        assert!(matches!(err, ResolveError::Fetch(_)));
    }
}
