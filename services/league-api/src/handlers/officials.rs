//! Officials bulk-edit endpoints.
//!
//! GET returns the prefill payload for an event row, PUT replaces the
//! event's assignments with the sanitized submission.

use axum::{
    extract::{Extension, Path},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::{debug, info, instrument};

use league_common::officials::{row_payload, sanitize};
use league_common::{ContentId, LeagueError};

use super::no_content;
use crate::error::ApiResult;
use crate::state::AppState;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

fn token_matches(given: Option<&str>, expected: &str) -> bool {
    given.is_some_and(|given| bool::from(given.as_bytes().ct_eq(expected.as_bytes())))
}

async fn is_event(state: &AppState, id: ContentId) -> ApiResult<bool> {
    Ok(state
        .repository
        .content(id)
        .await?
        .is_some_and(|r| r.is_event()))
}

#[instrument(skip(state))]
pub async fn get_officials_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Response> {
    let id = ContentId(id);
    if !is_event(&state, id).await? {
        return Ok(no_content());
    }

    let stored = state.repository.event_officials(id).await?;
    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        row_payload(stored.as_ref()),
    )
        .into_response())
}

#[instrument(skip(state, headers, raw))]
pub async fn put_officials_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Json(raw): Json<Value>,
) -> ApiResult<Response> {
    if let Some(expected) = &state.site.admin_token {
        let given = headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());
        if !token_matches(given, expected) {
            return Err(LeagueError::Unauthorized("missing or invalid admin token".to_string()).into());
        }
    }

    let id = ContentId(id);
    if !is_event(&state, id).await? {
        debug!("Ignoring officials for non-event content");
        return Ok(no_content());
    }

    let clean = sanitize(&raw);
    state.officials.set_event_officials(id, clean.clone()).await?;
    info!(duties = clean.len(), "Updated event officials");

    Ok(Json(clean).into_response())
}

/// GET /api/officials/directory: duties and officials offered by the form.
#[instrument(skip(state))]
pub async fn officials_directory_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> ApiResult<Response> {
    let directory = state.repository.officials_directory().await?;
    if !directory.is_usable() {
        return Ok(no_content());
    }
    Ok(Json(directory).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_matches() {
        assert!(token_matches(Some("s3cret"), "s3cret"));
        assert!(!token_matches(None, "s3cret"));
        assert!(!token_matches(Some(""), "s3cret"));
        assert!(!token_matches(Some("s3cre"), "s3cret"));
        assert!(!token_matches(Some("s3cret-extra"), "s3cret"));
        assert!(!token_matches(Some("S3CRET"), "s3cret"));
    }
}
