//! Media record model
//!
//! One record is persisted per alias when a link is registered. The record
//! is immutable after creation; the core only ever reads it back.

use serde::{Deserialize, Serialize};

/// How the source URL must be handled at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// The source URL is itself the final, streamable resource.
    Direct,
    /// The source URL is a hosting-provider landing page that must be
    /// scraped for the real download link.
    Indirect,
}

/// Persisted mapping from an alias to its origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRecord {
    /// The original URL supplied at creation. Immutable.
    pub source_url: String,
    /// Derived once at creation from the URL's host. Immutable.
    pub kind: MediaKind,
    /// Reserved for an external analytics collaborator; never incremented
    /// by the proxy itself.
    #[serde(default)]
    pub views: u64,
}

impl MediaRecord {
    /// Build a record, classifying the URL by substring match against the
    /// configured indirect hosting domains.
    #[must_use]
    pub fn classify(source_url: impl Into<String>, indirect_hosts: &[String]) -> Self {
        let source_url = source_url.into();
        let kind = if indirect_hosts.iter().any(|h| source_url.contains(h.as_str())) {
            MediaKind::Indirect
        } else {
            MediaKind::Direct
        };

        Self {
            source_url,
            kind,
            views: 0,
        }
    }
}
