//! Alias newtype
//!
//! The public-facing identifier under which a media file is served.
//! Aliases double as the filename offered to clients, so they are
//! sanitized to a safe character set at creation time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9._-]").expect("invalid alias charset regex"));

static KNOWN_EXTENSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(mp4|mkv|mov|avi|zip|rar)$").expect("invalid alias extension regex")
});

/// Sanitized filename string used as the registry key for a media record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    /// Sanitize a user-supplied name into a valid alias.
    ///
    /// Characters outside `[a-zA-Z0-9._-]` are replaced with `_`, and a
    /// `.mp4` extension is appended when the name does not already end in a
    /// recognized media or archive extension.
    #[must_use]
    pub fn sanitize(raw: &str) -> Self {
        let mut name = UNSAFE_CHARS.replace_all(raw.trim(), "_").into_owned();
        if !KNOWN_EXTENSION.is_match(&name) {
            name.push_str(".mp4");
        }
        Self(name)
    }

    /// Wrap an already-sanitized alias (e.g. one read back from a request path).
    #[must_use]
    pub fn from_string(name: String) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
