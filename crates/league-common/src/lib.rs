//! Common types and utilities shared across league-media crates.

pub mod cache_key;
pub mod color;
pub mod content;
pub mod error;
pub mod event;
pub mod officials;
pub mod repository;
pub mod week;

pub use cache_key::PreviewCacheKey;
pub use color::TeamColor;
pub use content::{ContentId, ContentKind, ContentRecord, TeamColors, TeamRecord};
pub use error::{LeagueError, LeagueResult};
pub use event::{EventDetails, EventSettings, EventSummary, Outcome, TeamResult};
pub use officials::{Duty, Official, OfficialAssignments, OfficialsDirectory};
pub use repository::{ContentRepository, OfficialsWriter};
pub use week::{DateQuery, IsoWeek};
