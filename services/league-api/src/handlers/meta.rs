//! GET /events/:id/meta

use axum::{
    extract::{Extension, Path},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

use league_common::ContentId;

use super::no_content;
use crate::error::ApiResult;
use crate::og::{build_event_meta, render_tags, EventMeta};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn event_meta_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Response> {
    let id = ContentId(id);
    let repo = &state.repository;

    let is_event = repo.content(id).await?.is_some_and(|r| r.is_event());
    let details = match repo.event_details(id).await? {
        Some(details) if is_event => details,
        _ => {
            debug!("Not an event");
            return Ok(no_content());
        }
    };

    let mut teams = HashMap::new();
    let team_ids = details
        .teams
        .iter()
        .chain(details.results.iter().map(|r| &r.team));
    for &team_id in team_ids {
        if teams.contains_key(&team_id) {
            continue;
        }
        if let Some(team) = repo.team(team_id).await? {
            teams.insert(team_id, team);
        }
    }

    let settings = repo.settings().await?;
    let meta = EventMeta {
        details: &details,
        teams: &teams,
        settings: &settings,
        image_url: state.site.preview_url(id),
        now: Utc::now().with_timezone(&state.site.timezone).naive_local(),
    };

    Ok(match build_event_meta(&meta) {
        Some(tags) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_tags(&tags),
        )
            .into_response(),
        None => no_content(),
    })
}
