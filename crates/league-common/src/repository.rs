//! Narrow accessors onto the host platform's content store.

use async_trait::async_trait;

use crate::content::{ContentId, ContentRecord, TeamRecord};
use crate::error::LeagueResult;
use crate::event::{EventDetails, EventSettings, EventSummary};
use crate::officials::{OfficialAssignments, OfficialsDirectory};
use crate::week::DateQuery;

/// Read-only view of events, teams and their relations.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Look up any content item by id.
    async fn content(&self, id: ContentId) -> LeagueResult<Option<ContentRecord>>;

    /// Team ids related to a content item, in relation order.
    async fn related_teams(&self, id: ContentId) -> LeagueResult<Vec<ContentId>>;

    async fn team(&self, id: ContentId) -> LeagueResult<Option<TeamRecord>>;

    async fn event_details(&self, id: ContentId) -> LeagueResult<Option<EventDetails>>;

    /// Events, optionally restricted to a date range, ordered by date.
    async fn events(&self, query: Option<DateQuery>) -> LeagueResult<Vec<EventSummary>>;

    async fn event_officials(&self, id: ContentId) -> LeagueResult<Option<OfficialAssignments>>;

    /// Duties and published officials for the bulk-edit form.
    async fn officials_directory(&self) -> LeagueResult<OfficialsDirectory>;

    async fn settings(&self) -> LeagueResult<EventSettings>;
}

/// Write-back of officials assignments to the host.
#[async_trait]
pub trait OfficialsWriter: Send + Sync {
    async fn set_event_officials(
        &self,
        id: ContentId,
        officials: OfficialAssignments,
    ) -> LeagueResult<()>;
}
