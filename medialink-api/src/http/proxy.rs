//! Streaming proxy endpoint
//!
//! Resolves an alias to its origin URL and relays the origin response,
//! honoring `Range` requests so media players can seek. The body is
//! streamed chunk-by-chunk; the whole payload is never buffered.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderName, Method, StatusCode},
    response::Response,
};

use crate::http::error::{AppError, AppResult};
use crate::http::AppState;
use medialink_core::models::Alias;

/// Descriptive User-Agent sent on outbound media fetches.
const PROXY_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Origin response headers relayed to the client, each only if present.
const FORWARDED_HEADERS: [HeaderName; 6] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CONTENT_RANGE,
    header::ACCEPT_RANGES,
    header::LAST_MODIFIED,
    header::ETAG,
];

/// GET|HEAD /{alias} - resolve an alias and stream the origin media
pub async fn serve_media(
    State(state): State<AppState>,
    Path(alias): Path<String>,
    method: Method,
    headers: HeaderMap,
) -> AppResult<Response> {
    let alias = Alias::from_string(alias);

    let record = state
        .store
        .get_record(&alias)
        .await?
        .ok_or_else(|| AppError::not_found("File not found"))?;

    let resolved_url = state.resolver.resolve(&alias, &record).await?;

    tracing::debug!(alias = %alias, method = %method, "Proxying media request");

    let mut request = state
        .proxy_client
        .request(method.clone(), &resolved_url)
        .header(header::USER_AGENT, PROXY_USER_AGENT);

    // Forward the inbound Range header verbatim so the origin can answer
    // with partial content.
    if let Some(range) = headers.get(header::RANGE) {
        request = request.header(header::RANGE, range.clone());
    }

    let origin_response = request.send().await.map_err(|e| {
        tracing::warn!(alias = %alias, error = %e, "Outbound media fetch failed");
        AppError::bad_gateway("Stream error")
    })?;

    let origin_status = origin_response.status();
    let origin_headers = origin_response.headers().clone();

    let mut builder = Response::builder();

    for name in FORWARDED_HEADERS {
        if let Some(value) = origin_headers.get(&name) {
            builder = builder.header(name, value.clone());
        }
    }

    // Declare range support only when the origin confirmed it: either it
    // sent Accept-Ranges itself, or it answered a ranged request with 206.
    if !origin_headers.contains_key(header::ACCEPT_RANGES)
        && origin_status == StatusCode::PARTIAL_CONTENT
    {
        builder = builder.header(header::ACCEPT_RANGES, "bytes");
    }

    builder = builder
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{alias}\""),
        )
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

    let response = if method == Method::HEAD {
        // Headers only; the origin body is never read.
        builder
            .status(StatusCode::OK)
            .body(Body::empty())
            .map_err(|e| AppError::internal(format!("Failed to build response: {e}")))?
    } else {
        // Relay the origin status and stream the body through unbuffered;
        // dropping the stream on client disconnect aborts the outbound fetch.
        builder
            .status(origin_status)
            .body(Body::from_stream(origin_response.bytes_stream()))
            .map_err(|e| AppError::internal(format!("Failed to build response: {e}")))?
    };

    Ok(response)
}
