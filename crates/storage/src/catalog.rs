//! Content catalog loaded from a YAML snapshot of the host's records.
//!
//! The snapshot lists teams, events, officials, duties and plain pages.
//! Officials write-backs are held in memory for the life of the process.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use league_common::{
    ContentId, ContentKind, ContentRecord, ContentRepository, DateQuery, Duty, EventDetails,
    EventSettings, EventSummary, LeagueError, LeagueResult, Official, OfficialAssignments,
    OfficialsDirectory, OfficialsWriter, TeamRecord, TeamResult,
};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    settings: EventSettings,
    #[serde(default)]
    teams: Vec<TeamRecord>,
    #[serde(default)]
    events: Vec<CatalogEvent>,
    #[serde(default)]
    officials: Vec<Official>,
    #[serde(default)]
    duties: Vec<Duty>,
    #[serde(default)]
    pages: Vec<CatalogPage>,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEvent {
    id: ContentId,
    #[serde(default)]
    title: String,
    modified: DateTime<Utc>,
    date: NaiveDateTime,
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    teams: Vec<ContentId>,
    #[serde(default)]
    results: Vec<TeamResult>,
    #[serde(default)]
    officials: Option<OfficialAssignments>,
}

impl CatalogEvent {
    fn details(&self) -> EventDetails {
        EventDetails {
            id: self.id,
            date: self.date,
            venue: self.venue.clone(),
            status: self.status.clone(),
            content: self.content.clone(),
            permalink: self.permalink.clone(),
            teams: self.teams.clone(),
            results: self.results.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogPage {
    id: ContentId,
    #[serde(default)]
    title: String,
    modified: DateTime<Utc>,
}

/// In-memory `ContentRepository` built from a YAML snapshot.
pub struct YamlCatalog {
    settings: EventSettings,
    teams: HashMap<ContentId, TeamRecord>,
    events: HashMap<ContentId, CatalogEvent>,
    officials: Vec<Official>,
    duties: Vec<Duty>,
    pages: HashMap<ContentId, CatalogPage>,
    assignments: RwLock<HashMap<ContentId, OfficialAssignments>>,
}

impl YamlCatalog {
    /// Parse a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> LeagueResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)
            .map_err(|e| LeagueError::CatalogError(format!("Invalid catalog: {}", e)))?;
        Ok(Self::from_file_data(file))
    }

    /// Load a catalog file. Relative logo paths resolve against `media_root`,
    /// or the catalog's own directory when none is given.
    pub fn load(path: impl AsRef<Path>, media_root: Option<&Path>) -> LeagueResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            LeagueError::CatalogError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let base = media_root
            .map(Path::to_path_buf)
            .or_else(|| path.parent().map(Path::to_path_buf))
            .unwrap_or_default();

        let catalog = Self::from_yaml(&yaml)?.with_media_root(&base);
        info!(
            path = %path.display(),
            teams = catalog.teams.len(),
            events = catalog.events.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    /// Resolve relative team logo paths against `root`.
    pub fn with_media_root(mut self, root: &Path) -> Self {
        for team in self.teams.values_mut() {
            if let Some(logo) = team.logo.take() {
                team.logo = Some(resolve(root, logo));
            }
        }
        self
    }

    fn from_file_data(file: CatalogFile) -> Self {
        let assignments = file
            .events
            .iter()
            .filter_map(|e| e.officials.clone().map(|o| (e.id, o)))
            .collect();

        Self {
            settings: file.settings,
            teams: file.teams.into_iter().map(|t| (t.id, t)).collect(),
            events: file.events.into_iter().map(|e| (e.id, e)).collect(),
            officials: file.officials,
            duties: file.duties,
            pages: file.pages.into_iter().map(|p| (p.id, p)).collect(),
            assignments: RwLock::new(assignments),
        }
    }
}

fn resolve(root: &Path, logo: PathBuf) -> PathBuf {
    if logo.is_absolute() {
        logo
    } else {
        root.join(logo)
    }
}

#[async_trait]
impl ContentRepository for YamlCatalog {
    async fn content(&self, id: ContentId) -> LeagueResult<Option<ContentRecord>> {
        if let Some(event) = self.events.get(&id) {
            return Ok(Some(ContentRecord {
                id,
                kind: ContentKind::Event,
                title: event.title.clone(),
                modified: event.modified,
            }));
        }
        if let Some(team) = self.teams.get(&id) {
            return Ok(Some(ContentRecord {
                id,
                kind: ContentKind::Team,
                title: team.short_name.clone(),
                modified: team.modified,
            }));
        }
        if let Some(official) = self.officials.iter().find(|o| o.id == id) {
            return Ok(Some(ContentRecord {
                id,
                kind: ContentKind::Official,
                title: official.title.clone(),
                modified: DateTime::<Utc>::default(),
            }));
        }
        Ok(self.pages.get(&id).map(|p| ContentRecord {
            id,
            kind: ContentKind::Other,
            title: p.title.clone(),
            modified: p.modified,
        }))
    }

    async fn related_teams(&self, id: ContentId) -> LeagueResult<Vec<ContentId>> {
        Ok(self
            .events
            .get(&id)
            .map(|e| e.teams.clone())
            .unwrap_or_default())
    }

    async fn team(&self, id: ContentId) -> LeagueResult<Option<TeamRecord>> {
        Ok(self.teams.get(&id).cloned())
    }

    async fn event_details(&self, id: ContentId) -> LeagueResult<Option<EventDetails>> {
        Ok(self.events.get(&id).map(CatalogEvent::details))
    }

    #[instrument(skip(self))]
    async fn events(&self, query: Option<DateQuery>) -> LeagueResult<Vec<EventSummary>> {
        let mut events: Vec<EventSummary> = self
            .events
            .values()
            .filter(|e| query.map_or(true, |q| q.contains(e.date)))
            .map(|e| EventSummary {
                id: e.id,
                title: e.title.clone(),
                date: e.date,
                venue: e.venue.clone(),
            })
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn event_officials(&self, id: ContentId) -> LeagueResult<Option<OfficialAssignments>> {
        Ok(self.assignments.read().await.get(&id).cloned())
    }

    async fn officials_directory(&self) -> LeagueResult<OfficialsDirectory> {
        Ok(OfficialsDirectory {
            duties: self.duties.clone(),
            officials: self.officials.clone(),
        }
        .sorted())
    }

    async fn settings(&self) -> LeagueResult<EventSettings> {
        Ok(self.settings.clone())
    }
}

#[async_trait]
impl OfficialsWriter for YamlCatalog {
    #[instrument(skip(self, officials))]
    async fn set_event_officials(
        &self,
        id: ContentId,
        officials: OfficialAssignments,
    ) -> LeagueResult<()> {
        if !self.events.contains_key(&id) {
            return Err(LeagueError::ContentNotFound(format!("event {}", id)));
        }
        self.assignments.write().await.insert(id, officials);
        Ok(())
    }
}
