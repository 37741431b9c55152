//! Event details consumed by sharing metadata and admin listings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::content::ContentId;

/// Event statuses that replace the normal title with a status banner.
pub const SPECIAL_STATUSES: &[&str] = &["postponed", "cancelled", "tbd"];

/// Outcome attached to a team's result row (e.g. "Win", "Forfeit Loss").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub title: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

impl Outcome {
    /// Abbreviation, falling back to the first character of the title.
    pub fn abbreviation(&self) -> String {
        match &self.abbreviation {
            Some(abbr) if !abbr.is_empty() => abbr.clone(),
            _ => self.title.chars().take(1).collect(),
        }
    }
}

/// One team's row in an event's result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamResult {
    pub team: ContentId,
    /// Result columns keyed by column slug; `r` is the run/score total.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

impl TeamResult {
    pub fn score(&self) -> &str {
        self.values.get("r").map(String::as_str).unwrap_or("")
    }
}

/// Event fields read by the sharing metadata builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub id: ContentId,
    /// Scheduled start, in site-local time.
    pub date: NaiveDateTime,
    #[serde(default)]
    pub venue: Option<String>,
    /// Event status slug such as `ok`, `postponed`, `cancelled` or `tbd`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub teams: Vec<ContentId>,
    #[serde(default)]
    pub results: Vec<TeamResult>,
}

impl EventDetails {
    /// Uppercased special status, if the event carries one.
    pub fn special_status(&self) -> Option<String> {
        self.status
            .as_deref()
            .filter(|s| SPECIAL_STATUSES.contains(s))
            .map(str::to_uppercase)
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn venue_name(&self) -> &str {
        self.venue
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or("Venue TBD")
    }
}

/// Site-wide event display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSettings {
    #[serde(default)]
    pub reverse_teams: bool,
    #[serde(default = "default_delimiter")]
    pub teams_delimiter: String,
}

fn default_delimiter() -> String {
    "vs".to_string()
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            reverse_teams: false,
            teams_delimiter: default_delimiter(),
        }
    }
}

/// Row of the admin event listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: ContentId,
    pub title: String,
    pub date: NaiveDateTime,
    pub venue: Option<String>,
}
