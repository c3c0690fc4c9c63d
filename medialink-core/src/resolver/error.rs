// Resolver error types

/// Resolution-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No extraction pattern matched the landing page: the origin file was
    /// removed or the provider changed its page layout. Terminal for the
    /// request, never retried.
    #[error("No recognizable download link on origin page")]
    LinkNotFound,

    /// Network or transport failure fetching the landing page, including
    /// timeouts and non-2xx page responses.
    #[error("Failed to fetch origin page: {0}")]
    Fetch(String),

    /// The registry itself failed; distinct from a cache miss.
    #[error("Registry error: {0}")]
    Registry(#[from] crate::Error),
}
