//! Cache key for rendered head-to-head previews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::{ContentId, TeamRecord};

/// Identifies one rendered preview for a team pair.
///
/// Changes whenever either team's identity or last-modified time changes,
/// so any edit to a team's logo or colors yields a new artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewCacheKey {
    pub team_a: ContentId,
    pub team_a_modified: i64,
    pub team_b: ContentId,
    pub team_b_modified: i64,
}

impl PreviewCacheKey {
    pub fn new(
        team_a: ContentId,
        team_a_modified: DateTime<Utc>,
        team_b: ContentId,
        team_b_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            team_a,
            team_a_modified: team_a_modified.timestamp(),
            team_b,
            team_b_modified: team_b_modified.timestamp(),
        }
    }

    pub fn for_teams(a: &TeamRecord, b: &TeamRecord) -> Self {
        Self::new(a.id, a.modified, b.id, b.modified)
    }

    /// File name of the artifact in the upload directory.
    pub fn file_name(&self) -> String {
        format!("{}.png", self)
    }
}

impl fmt::Display for PreviewCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team_image_{}_{}-{}_{}",
            self.team_a, self.team_a_modified, self.team_b, self.team_b_modified
        )
    }
}
