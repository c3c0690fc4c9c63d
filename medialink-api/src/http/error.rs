// HTTP error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use medialink_core::resolver::ResolveError;

/// Result type for HTTP handlers
pub type AppResult<T> = Result<T, AppError>;

/// Application error with HTTP status code
///
/// Proxy-path errors are rendered as plain-text bodies; the creation path
/// returns its own structured JSON result and only falls back to this type
/// for infrastructure failures.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Convert medialink_core errors to HTTP errors
impl From<medialink_core::Error> for AppError {
    fn from(err: medialink_core::Error) -> Self {
        use medialink_core::Error;

        match err {
            Error::NotFound(msg) => Self::not_found(msg),
            Error::Unauthorized(msg) => Self::unauthorized(msg),
            Error::Upstream(msg) => {
                tracing::error!("Upstream error: {}", msg);
                Self::bad_gateway("Upstream error")
            }
            Error::Redis(e) => {
                tracing::error!("Redis error: {}", e);
                Self::internal("Service temporarily unavailable")
            }
            Error::Serialization(e) => {
                tracing::error!("Serialization error: {}", e);
                Self::internal("Data processing error")
            }
            other => {
                tracing::error!("Internal error: {}", other);
                Self::internal("Internal server error")
            }
        }
    }
}

/// Convert resolver errors to HTTP errors
impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::LinkNotFound => Self::not_found("Origin file removed"),
            ResolveError::Fetch(msg) => {
                tracing::warn!("Scrape fetch failed: {}", msg);
                Self::bad_gateway("Scraping error")
            }
            ResolveError::Registry(e) => e.into(),
        }
    }
}
