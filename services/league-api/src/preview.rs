//! Head-to-head preview resolution.
//!
//! Resolves an event to its two teams, reuses a stored render when the
//! pointer for the teams' cache key is still live, and otherwise renders,
//! stores and points at a fresh image.

use bytes::Bytes;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use league_common::{
    ContentId, ContentRepository, LeagueError, LeagueResult, PreviewCacheKey, TeamColor,
    TeamRecord,
};
use storage::{ArtifactStore, PointerStore, PREVIEW_TTL};

use crate::metrics::MetricsCollector;

/// Result of a preview request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The request does not describe a renderable matchup; nothing is produced.
    Declined,
    /// PNG bytes to serve.
    Image(Bytes),
    /// The file vanished between writing and serving.
    NotFound,
}

pub struct PreviewService {
    repository: Arc<dyn ContentRepository>,
    pointers: Arc<dyn PointerStore>,
    artifacts: ArtifactStore,
    metrics: Arc<MetricsCollector>,
}

impl PreviewService {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        pointers: Arc<dyn PointerStore>,
        artifacts: ArtifactStore,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            repository,
            pointers,
            artifacts,
            metrics,
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve_and_serve(
        &self,
        content_id: Option<ContentId>,
    ) -> LeagueResult<PreviewOutcome> {
        self.metrics.record_preview_request();

        let Some((team_a, team_b)) = self.resolve_teams(content_id).await? else {
            self.metrics.record_declined();
            return Ok(PreviewOutcome::Declined);
        };

        let color_a = TeamColor::from_record(team_a.colors.as_ref());
        let color_b = TeamColor::from_record(team_b.colors.as_ref());

        if color_a.is_default()
            && color_b.is_default()
            && team_a.logo.is_none()
            && team_b.logo.is_none()
        {
            debug!("Neither team has a color or logo");
            self.metrics.record_declined();
            return Ok(PreviewOutcome::Declined);
        }

        let key = PreviewCacheKey::for_teams(&team_a, &team_b);
        let pointer_key = key.to_string();

        if let Some(path) = self.lookup_pointer(&pointer_key).await {
            if self.artifacts.exists(&path).await? {
                self.metrics.record_cache_hit();
                debug!(key = %pointer_key, path = %path, "Preview pointer hit");
                return self.serve(&path).await;
            }
            debug!(key = %pointer_key, path = %path, "Pointed-at file missing, rendering");
        }

        let png = self
            .render(color_a, color_b, team_a.logo.clone(), team_b.logo.clone())
            .await?;

        let file_name = key.file_name();
        self.artifacts.put(&file_name, Bytes::from(png)).await?;
        self.store_pointer(&pointer_key, &file_name).await;

        info!(key = %pointer_key, "Rendered head-to-head preview");
        self.serve(&file_name).await
    }

    /// The first two related teams of an event, or `None` when the content
    /// is missing, not an event, or has fewer than two team records.
    async fn resolve_teams(
        &self,
        content_id: Option<ContentId>,
    ) -> LeagueResult<Option<(TeamRecord, TeamRecord)>> {
        let Some(id) = content_id else {
            debug!("No content id");
            return Ok(None);
        };

        match self.repository.content(id).await? {
            Some(record) if record.is_event() => {}
            Some(record) => {
                debug!(kind = ?record.kind, "Content is not an event");
                return Ok(None);
            }
            None => {
                debug!("Content not found");
                return Ok(None);
            }
        }

        let mut teams = Vec::with_capacity(2);
        for team_id in self.repository.related_teams(id).await? {
            if let Some(team) = self.repository.team(team_id).await? {
                teams.push(team);
                if teams.len() == 2 {
                    break;
                }
            }
        }

        let mut teams = teams.into_iter();
        Ok(match (teams.next(), teams.next()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => {
                debug!("Fewer than two related teams");
                None
            }
        })
    }

    async fn lookup_pointer(&self, key: &str) -> Option<String> {
        match self.pointers.get(key).await {
            Ok(path) => path,
            Err(e) => {
                warn!(key = %key, error = %e, "Pointer lookup failed, rendering");
                None
            }
        }
    }

    async fn store_pointer(&self, key: &str, path: &str) {
        if let Err(e) = self.pointers.set(key, path, PREVIEW_TTL).await {
            warn!(key = %key, error = %e, "Failed to store preview pointer");
        }
    }

    async fn render(
        &self,
        color_a: TeamColor,
        color_b: TeamColor,
        logo_a: Option<PathBuf>,
        logo_b: Option<PathBuf>,
    ) -> LeagueResult<Vec<u8>> {
        let start = Instant::now();

        let png = tokio::task::spawn_blocking(move || {
            renderer::generate(color_a, color_b, logo_a.as_deref(), logo_b.as_deref())
        })
        .await
        .map_err(|e| LeagueError::InternalError(format!("Render task failed: {}", e)))??;

        self.metrics.record_render(start.elapsed());
        Ok(png)
    }

    async fn serve(&self, path: &str) -> LeagueResult<PreviewOutcome> {
        Ok(match self.artifacts.get(path).await? {
            Some(bytes) => PreviewOutcome::Image(bytes),
            None => {
                warn!(path = %path, "Preview file missing");
                PreviewOutcome::NotFound
            }
        })
    }
}
