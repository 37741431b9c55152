//! GET /head-to-head?post=<id>

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;

use league_common::ContentId;

use super::no_content;
use crate::error::ApiResult;
use crate::preview::PreviewOutcome;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    pub post: Option<String>,
}

#[instrument(skip(state))]
pub async fn head_to_head_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<PreviewParams>,
) -> ApiResult<Response> {
    // Unparseable ids resolve to no content, like a missing one.
    let id = params.post.as_deref().and_then(|p| p.parse::<ContentId>().ok());

    Ok(match state.preview.resolve_and_serve(id).await? {
        PreviewOutcome::Declined => no_content(),
        PreviewOutcome::Image(bytes) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], bytes).into_response()
        }
        PreviewOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "image/png")],
            "Image not found.",
        )
            .into_response(),
    })
}
