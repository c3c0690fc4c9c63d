//! Download-link extraction patterns
//!
//! Each pattern is a pure probe over the landing page body, keyed to an
//! anchor attribute signature the hosting provider is known to render.
//! Patterns are tried in order and the first match wins, so adding support
//! for a new page layout means appending a pattern here, nothing more.

use once_cell::sync::Lazy;
use regex::Regex;

pub struct LinkPattern {
    pub name: &'static str,
    regex: Regex,
}

impl LinkPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("invalid link extraction pattern"),
        }
    }

    /// Probe a page body, returning the captured URL on match.
    #[must_use]
    pub fn probe<'a>(&self, body: &'a str) -> Option<&'a str> {
        self.regex
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

static PATTERNS: Lazy<Vec<LinkPattern>> = Lazy::new(|| {
    vec![
        LinkPattern::new(
            "download-file-label",
            r#"aria-label="Download file"\s+href="([^"]+)""#,
        ),
        LinkPattern::new(
            "download-button-id",
            r#"id="downloadButton"\s+href="([^"]+)""#,
        ),
    ]
});

/// All known extraction patterns, in probe order.
#[must_use]
pub fn patterns() -> &'static [LinkPattern] {
    &PATTERNS
}

/// Scan a landing page body for a download link, trying each pattern in
/// order until one matches.
#[must_use]
pub fn extract_download_link(body: &str) -> Option<&str> {
    patterns().iter().find_map(|p| p.probe(body))
}
