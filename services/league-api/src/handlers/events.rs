//! GET /api/events?sp_week_filter=YYYY-Www

use axum::{
    extract::{Extension, Query},
    Json,
};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

use league_common::week::week_summary;
use league_common::{ContentId, EventSummary, IsoWeek, OfficialAssignments};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EventsParams {
    pub sp_week_filter: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub summary: String,
    /// Canonical `YYYY-Www` of the applied filter.
    pub week: Option<String>,
    pub starts_at: Option<DateTime<FixedOffset>>,
    pub ends_at: Option<DateTime<FixedOffset>>,
    pub events: Vec<EventRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventRow {
    pub id: ContentId,
    pub title: String,
    pub date: NaiveDateTime,
    pub venue: Option<String>,
    /// Stored assignments, prefilled into the bulk-edit form.
    pub officials: OfficialAssignments,
}

impl EventRow {
    fn new(event: EventSummary, officials: OfficialAssignments) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.date,
            venue: event.venue,
            officials,
        }
    }
}

#[instrument(skip(state))]
pub async fn events_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<EventsParams>,
) -> ApiResult<Json<EventsResponse>> {
    let raw = params.sp_week_filter.as_deref();
    let week = raw.and_then(IsoWeek::parse);

    let range = week.and_then(|w| w.range(&state.site.timezone));
    let (starts_at, ends_at) = match range {
        Some((start, end)) => (Some(start.fixed_offset()), Some(end.fixed_offset())),
        None => (None, None),
    };

    let summaries = state.repository.events(week.map(|w| w.date_query())).await?;
    let mut events = Vec::with_capacity(summaries.len());
    for event in summaries {
        let officials = state
            .repository
            .event_officials(event.id)
            .await?
            .unwrap_or_default();
        events.push(EventRow::new(event, officials));
    }

    Ok(Json(EventsResponse {
        summary: week_summary(raw),
        week: week.map(|w| w.to_string()),
        starts_at,
        ends_at,
        events,
    }))
}
