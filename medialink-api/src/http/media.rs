//! Alias creation endpoint
//!
//! Registers a new alias for a source URL. The creation surface uses a
//! structured `{success, error}` JSON result; business failures (missing
//! field, duplicate alias) are reported in-band with success=false.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::http::error::AppResult;
use crate::http::middleware::session_is_valid;
use crate::http::AppState;
use medialink_core::models::{Alias, MediaRecord};

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CreateResponse {
    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            link: None,
        }
    }

    fn success(link: String) -> Self {
        Self {
            success: true,
            error: None,
            link: Some(link),
        }
    }
}

/// POST /create - register an alias for a source URL
pub async fn create_alias(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(request): Form<CreateRequest>,
) -> AppResult<Response> {
    if !session_is_valid(&headers, &state) {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(CreateResponse::failure("Unauthorized")),
        )
            .into_response());
    }

    if request.url.trim().is_empty() {
        return Ok(Json(CreateResponse::failure("Missing URL")).into_response());
    }
    if request.name.trim().is_empty() {
        return Ok(Json(CreateResponse::failure("Missing filename")).into_response());
    }

    let alias = Alias::sanitize(&request.name);

    // Aliases are unique: an existing record is never overwritten.
    if state.store.record_exists(&alias).await? {
        return Ok(Json(CreateResponse::failure("Filename already exists!")).into_response());
    }

    let record = MediaRecord::classify(request.url.trim(), &state.indirect_hosts);
    state.store.put_record(&alias, &record).await?;

    tracing::info!(alias = %alias, kind = ?record.kind, "Alias registered");

    let link = format!("{}/{}", public_base(&state, &headers), alias);
    Ok(Json(CreateResponse::success(link)).into_response())
}

/// Base URL for generated links: the configured public base when set,
/// otherwise derived from the inbound Host header.
fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.public_base_url {
        return base.trim_end_matches('/').to_string();
    }

    let host = headers
        .get(axum::http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let protocol = if host.contains("localhost") || host.starts_with("127.") {
        "http"
    } else {
        "https"
    };

    format!("{protocol}://{host}")
}
