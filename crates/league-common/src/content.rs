//! Read-only views of host content records.
//!
//! The host platform stores events, teams and officials as loosely shaped
//! records. These types carry only the fields this workspace reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::LeagueError;

/// Identifier of a content item on the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ContentId)
            .map_err(|e| LeagueError::InvalidParameter {
                param: "post".to_string(),
                message: e.to_string(),
            })
    }
}

/// Content type of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Event,
    Team,
    Official,
    #[serde(other)]
    Other,
}

/// Minimal content record: identity, type and modification time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: ContentId,
    pub kind: ContentKind,
    #[serde(default)]
    pub title: String,
    pub modified: DateTime<Utc>,
}

impl ContentRecord {
    pub fn is_event(&self) -> bool {
        self.kind == ContentKind::Event
    }
}

/// Structured color metadata attached to a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
}

/// Team record with the fields used for previews and titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: ContentId,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub colors: Option<TeamColors>,
    /// Full-resolution path of the team's primary attached image.
    #[serde(default)]
    pub logo: Option<PathBuf>,
    pub short_name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl TeamRecord {
    /// Abbreviation, falling back to the first three characters of the short name.
    pub fn abbreviation(&self) -> String {
        match &self.abbreviation {
            Some(abbr) if !abbr.trim().is_empty() => abbr.clone(),
            _ => self.short_name.chars().take(3).collect::<String>().to_uppercase(),
        }
    }
}
