//! Open Graph sharing metadata for event pages.

use chrono::{NaiveDateTime, Timelike};
use std::collections::HashMap;

use league_common::{ContentId, EventDetails, EventSettings, TeamRecord, TeamResult};

/// Placeholder for a result row without an outcome.
const NO_OUTCOME: &str = "—";

/// A single `<meta property=".." content=".." />` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub property: String,
    pub content: String,
}

impl MetaTag {
    pub fn to_html(&self) -> String {
        format!(
            r#"<meta property="{}" content="{}" />"#,
            escape_attr(&self.property),
            escape_attr(&self.content)
        )
    }
}

/// Ordered collection of meta tags.
#[derive(Debug, Clone, Default)]
pub struct MetaTagBuilder {
    tags: Vec<MetaTag>,
}

impl MetaTagBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, property: &str, content: impl Into<String>) -> Self {
        self.tags.push(MetaTag {
            property: property.to_string(),
            content: content.into(),
        });
        self
    }

    pub fn build(self) -> Vec<MetaTag> {
        self.tags
    }
}

/// Render tags one per line.
pub fn render_tags(tags: &[MetaTag]) -> String {
    let mut html = String::new();
    for tag in tags {
        html.push_str(&tag.to_html());
        html.push('\n');
    }
    html
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Inputs for building an event's sharing metadata.
pub struct EventMeta<'a> {
    pub details: &'a EventDetails,
    /// Team records for every team referenced by the event or its results.
    pub teams: &'a HashMap<ContentId, TeamRecord>,
    pub settings: &'a EventSettings,
    /// Preview image URL.
    pub image_url: String,
    /// Current site-local time.
    pub now: NaiveDateTime,
}

/// Build the Open Graph tags for an event.
///
/// Returns `None` when the event has a result table with fewer than two
/// rows.
pub fn build_event_meta(meta: &EventMeta<'_>) -> Option<Vec<MetaTag>> {
    let details = meta.details;
    let venue = details.venue_name();

    let mut title = event_title(details, meta.teams, meta.settings);
    let mut description = format!(
        "{} at {}.",
        details.date.format("%B %-d, %Y %-I:%M %p"),
        venue
    );

    if let Some(status) = details.special_status() {
        description = format!("{} — {}", status, description);
        title = format!(
            "{} — {} — {} — {}",
            status,
            title,
            short_date(details.date, true),
            venue
        );
    } else if !details.has_results() && details.date > meta.now {
        title = format!("{} — {} — {}", title, short_date(details.date, true), venue);
    }

    if details.has_results() {
        let mut rows: Vec<&TeamResult> = details.results.iter().collect();
        if meta.settings.reverse_teams {
            rows.reverse();
        }
        let [first, second, ..] = rows.as_slice() else {
            return None;
        };

        let name_a = team_name(meta.teams, first.team);
        let name_b = team_name(meta.teams, second.team);

        title = format!(
            "{} {}-{} {} — {}",
            name_a,
            first.score(),
            second.score(),
            name_b,
            short_date(details.date, false)
        );
        if let Some(suffix) = special_result_suffix(&rows) {
            title.push_str(&format!(" ({})", suffix));
        }

        description.push_str(&format!(
            " {} ({}), {} ({}).",
            name_a,
            outcome_title(first),
            name_b,
            outcome_title(second)
        ));
    }

    description.push(' ');
    description.push_str(&details.content);

    Some(
        MetaTagBuilder::new()
            .tag("og:type", "article")
            .tag("og:image", meta.image_url.clone())
            .tag("og:title", title)
            .tag("og:description", description)
            .tag("og:url", details.permalink.clone())
            .build(),
    )
}

/// Unique team short names in relation order, joined by the delimiter.
pub fn event_title(
    details: &EventDetails,
    teams: &HashMap<ContentId, TeamRecord>,
    settings: &EventSettings,
) -> String {
    let mut names: Vec<&str> = Vec::new();
    for id in details.teams.iter().filter(|id| id.0 > 0) {
        if let Some(team) = teams.get(id) {
            if !names.contains(&team.short_name.as_str()) {
                names.push(&team.short_name);
            }
        }
    }
    if settings.reverse_teams {
        names.reverse();
    }
    let delimiter = format!(" {} ", settings.teams_delimiter);
    names.join(delimiter.as_str())
}

/// `Sat 3/7/26 7PM`, with minutes only when non-zero.
pub fn short_date(date: NaiveDateTime, with_time: bool) -> String {
    let day = date.format("%a %-m/%-d/%y").to_string();
    if !with_time {
        return day;
    }
    let time = if date.minute() == 0 {
        date.format("%-I%p")
    } else {
        date.format("%-I:%M%p")
    };
    format!("{} {}", day, time)
}

fn team_name(teams: &HashMap<ContentId, TeamRecord>, id: ContentId) -> &str {
    teams.get(&id).map(|t| t.short_name.as_str()).unwrap_or_default()
}

fn outcome_title(row: &TeamResult) -> &str {
    row.outcomes
        .first()
        .map(|o| o.title.as_str())
        .unwrap_or(NO_OUTCOME)
}

/// Forfeit marker from the first row whose outcome is a forfeit.
fn special_result_suffix(rows: &[&TeamResult]) -> Option<&'static str> {
    rows.iter()
        .filter_map(|row| row.outcomes.first())
        .find_map(|outcome| match outcome.abbreviation().to_uppercase().as_str() {
            "TF-W" => Some("TF-W"),
            "TF-L" => Some("TF"),
            "F-W" | "F-L" => Some("Forfeit"),
            _ => None,
        })
}
