//! Tests for event sharing metadata.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use league_api::og::{build_event_meta, event_title, render_tags, EventMeta, MetaTag};
use league_common::{
    ContentId, ContentRepository, EventDetails, EventSettings, Outcome, TeamRecord, TeamResult,
};
use storage::YamlCatalog;
use test_utils::SAMPLE_CATALOG_YAML;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

async fn fixture(id: u64) -> (EventDetails, HashMap<ContentId, TeamRecord>) {
    let catalog = YamlCatalog::from_yaml(SAMPLE_CATALOG_YAML).unwrap();
    let details = catalog.event_details(ContentId(id)).await.unwrap().unwrap();
    let mut teams = HashMap::new();
    for team in [10, 20, 30, 40] {
        let record = catalog.team(ContentId(team)).await.unwrap().unwrap();
        teams.insert(record.id, record);
    }
    (details, teams)
}

fn meta(
    details: &EventDetails,
    teams: &HashMap<ContentId, TeamRecord>,
    settings: &EventSettings,
    now: NaiveDateTime,
) -> Option<Vec<MetaTag>> {
    build_event_meta(&EventMeta {
        details,
        teams,
        settings,
        image_url: format!("https://league.example/head-to-head?post={}", details.id),
        now,
    })
}

fn content<'a>(tags: &'a [MetaTag], property: &str) -> &'a str {
    tags.iter()
        .find(|t| t.property == property)
        .map(|t| t.content.as_str())
        .unwrap_or_else(|| panic!("missing {}", property))
}

#[tokio::test]
async fn test_upcoming_event() {
    let (details, teams) = fixture(100).await;
    let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();

    let properties: Vec<&str> = tags.iter().map(|t| t.property.as_str()).collect();
    assert_eq!(
        properties,
        vec!["og:type", "og:image", "og:title", "og:description", "og:url"]
    );
    assert_eq!(content(&tags, "og:type"), "article");
    assert_eq!(
        content(&tags, "og:image"),
        "https://league.example/head-to-head?post=100"
    );
    assert_eq!(
        content(&tags, "og:title"),
        "Hawks vs Owls — Tue 2/10/26 7PM — Memorial Field"
    );
    assert_eq!(
        content(&tags, "og:description"),
        "February 10, 2026 7:00 PM at Memorial Field. Opening night."
    );
    assert_eq!(content(&tags, "og:url"), "https://league.example/event/100");
}

#[tokio::test]
async fn test_past_event_without_results_keeps_plain_title() {
    let (details, teams) = fixture(100).await;
    let later = NaiveDate::from_ymd_opt(2026, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let tags = meta(&details, &teams, &EventSettings::default(), later).unwrap();
    assert_eq!(content(&tags, "og:title"), "Hawks vs Owls");
}

#[tokio::test]
async fn test_final_score() {
    let (details, teams) = fixture(101).await;
    let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();

    assert_eq!(content(&tags, "og:title"), "Owls 7-3 Hawks — Sat 2/14/26");
    assert_eq!(
        content(&tags, "og:description"),
        "February 14, 2026 6:30 PM at Riverside Park. Owls (Win), Hawks (Loss). "
    );
}

#[tokio::test]
async fn test_forfeit_suffix() {
    let (details, teams) = fixture(105).await;
    let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();
    assert_eq!(
        content(&tags, "og:title"),
        "Hawks 0-9 Owls — Thu 2/12/26 (Forfeit)"
    );
}

#[tokio::test]
async fn test_technical_forfeit_suffixes() {
    let (mut details, teams) = fixture(101).await;

    for (abbreviation, suffix) in [("TF-W", "(TF-W)"), ("tf-l", "(TF)")] {
        details.results[0].outcomes = vec![Outcome {
            title: "Technical".to_string(),
            abbreviation: Some(abbreviation.to_string()),
        }];
        let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();
        assert!(
            content(&tags, "og:title").ends_with(suffix),
            "{}",
            content(&tags, "og:title")
        );
    }
}

#[tokio::test]
async fn test_missing_outcome_renders_dash() {
    let (mut details, teams) = fixture(101).await;
    details.results[1].outcomes.clear();

    let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();
    assert!(content(&tags, "og:description").contains("Owls (Win), Hawks (—)."));
}

#[tokio::test]
async fn test_postponed_event() {
    let (details, teams) = fixture(102).await;
    let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();

    assert_eq!(
        content(&tags, "og:title"),
        "POSTPONED — Hawks vs Plain — Sun 3/1/26 12PM — Venue TBD"
    );
    assert_eq!(
        content(&tags, "og:description"),
        "POSTPONED — March 1, 2026 12:00 PM at Venue TBD. "
    );
}

#[tokio::test]
async fn test_reverse_teams_and_delimiter() {
    let settings = EventSettings {
        reverse_teams: true,
        teams_delimiter: "@".to_string(),
    };

    let (details, teams) = fixture(100).await;
    assert_eq!(event_title(&details, &teams, &settings), "Owls @ Hawks");

    let (details, teams) = fixture(101).await;
    let tags = meta(&details, &teams, &settings, now()).unwrap();
    assert_eq!(content(&tags, "og:title"), "Hawks 3-7 Owls — Sat 2/14/26");
}

#[tokio::test]
async fn test_duplicate_teams_listed_once() {
    let (mut details, teams) = fixture(100).await;
    details.teams = vec![ContentId(10), ContentId(10), ContentId(0), ContentId(20)];
    assert_eq!(
        event_title(&details, &teams, &EventSettings::default()),
        "Hawks vs Owls"
    );
}

#[tokio::test]
async fn test_single_result_row_produces_no_tags() {
    let (mut details, teams) = fixture(101).await;
    details.results.truncate(1);
    assert!(meta(&details, &teams, &EventSettings::default(), now()).is_none());
}

#[tokio::test]
async fn test_values_are_escaped_in_html() {
    let (mut details, teams) = fixture(100).await;
    details.content = r#"Bring "snacks" & <chairs>"#.to_string();
    details.venue = Some("O'Brien Park".to_string());

    let tags = meta(&details, &teams, &EventSettings::default(), now()).unwrap();
    let html = render_tags(&tags);

    assert!(html.contains("Bring &quot;snacks&quot; &amp; &lt;chairs&gt;"));
    assert!(html.contains("O&#039;Brien Park"));
    assert!(!html.contains("<chairs>"));
    assert_eq!(html.lines().count(), 5);
}

#[test]
fn test_result_row_score_defaults_empty() {
    let row = TeamResult {
        team: ContentId(1),
        values: Default::default(),
        outcomes: vec![],
    };
    assert_eq!(row.score(), "");
}
