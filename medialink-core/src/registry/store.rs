//! Typed adapter over the raw registry for media records
//!
//! Records are stored as JSON under the `media:` keyspace. Records are
//! written exactly once at alias creation and never deleted by the core.

use std::sync::Arc;

use super::{Registry, MEDIA_KEYSPACE};
use crate::models::{Alias, MediaRecord};
use crate::Result;

#[derive(Clone)]
pub struct MediaStore {
    registry: Arc<dyn Registry>,
}

impl MediaStore {
    #[must_use]
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self { registry }
    }

    /// The underlying registry, shared with the resolution cache.
    #[must_use]
    pub fn registry(&self) -> Arc<dyn Registry> {
        self.registry.clone()
    }

    fn key(alias: &Alias) -> String {
        format!("{MEDIA_KEYSPACE}{alias}")
    }

    pub async fn get_record(&self, alias: &Alias) -> Result<Option<MediaRecord>> {
        let Some(json) = self.registry.get(&Self::key(alias)).await? else {
            return Ok(None);
        };
        let record: MediaRecord = serde_json::from_str(&json)?;
        Ok(Some(record))
    }

    pub async fn record_exists(&self, alias: &Alias) -> Result<bool> {
        self.registry.exists(&Self::key(alias)).await
    }

    /// Persist a record. Records have no expiry; deletion, if any, is an
    /// external operation.
    pub async fn put_record(&self, alias: &Alias, record: &MediaRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.registry.set(&Self::key(alias), &json, None).await
    }
}

impl std::fmt::Debug for MediaStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaStore").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaKind;
    use crate::registry::MemoryRegistry;

    fn make_store() -> MediaStore {
        MediaStore::new(Arc::new(MemoryRegistry::new()))
    }

    #[tokio::test]
    async fn test_put_then_get_record() {
        let store = make_store();
        let alias = Alias::sanitize("movie.mp4");
        let record = MediaRecord::classify(
            "https://cdn.example/movie.mp4",
            &["mediafire.com".to_string()],
        );

        store.put_record(&alias, &record).await.unwrap();

        let loaded = store.get_record(&alias).await.unwrap().unwrap();
        assert_eq!(loaded.source_url, "https://cdn.example/movie.mp4");
        assert_eq!(loaded.kind, MediaKind::Direct);
        assert!(store.record_exists(&alias).await.unwrap());
    }

    #[tokio::test]
    async fn test_absent_record() {
        let store = make_store();
        let alias = Alias::sanitize("nothing.mp4");

        assert!(store.get_record(&alias).await.unwrap().is_none());
        assert!(!store.record_exists(&alias).await.unwrap());
    }
}
