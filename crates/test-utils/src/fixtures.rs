//! Common fixtures for league-media tests.

/// Catalog snapshot with two teams, a scheduled event, a finished event,
/// a forfeit, a single-team event and a non-event page.
pub const SAMPLE_CATALOG_YAML: &str = r##"
settings:
  reverse_teams: false
  teams_delimiter: vs

teams:
  - id: 10
    modified: 2026-01-05T12:00:00Z
    short_name: Hawks
    abbreviation: HAW
    colors:
      primary: "#FF0000"
  - id: 20
    modified: 2026-01-06T08:30:00Z
    short_name: Owls
    colors:
      primary: "#0000FF"
  - id: 30
    modified: 2026-01-07T00:00:00Z
    short_name: Plain
  - id: 40
    modified: 2026-01-07T00:00:00Z
    short_name: Blank
    colors:
      primary: "not-a-color"

officials:
  - id: 501
    title: Pat Umpire
  - id: 502
    title: Sam Scorer

duties:
  - id: 1
    name: Umpire
  - id: 2
    name: Scorekeeper

pages:
  - id: 900
    title: About the League
    modified: 2026-01-01T00:00:00Z

events:
  - id: 100
    title: Hawks vs Owls
    modified: 2026-01-08T00:00:00Z
    date: 2026-02-10T19:00:00
    venue: Memorial Field
    status: ok
    content: Opening night.
    permalink: https://league.example/event/100
    teams: [10, 20]
    officials:
      1: [501]
  - id: 101
    title: Owls vs Hawks
    modified: 2026-01-09T00:00:00Z
    date: 2026-02-14T18:30:00
    venue: Riverside Park
    status: ok
    permalink: https://league.example/event/101
    teams: [20, 10]
    results:
      - team: 20
        values: { r: "7" }
        outcomes:
          - title: Win
            abbreviation: W
      - team: 10
        values: { r: "3" }
        outcomes:
          - title: Loss
  - id: 102
    title: Hawks vs Plain
    modified: 2026-01-09T00:00:00Z
    date: 2026-03-01T12:00:00
    status: postponed
    permalink: https://league.example/event/102
    teams: [10, 30]
  - id: 103
    title: Hawks
    modified: 2026-01-09T00:00:00Z
    date: 2026-03-02T12:00:00
    teams: [10]
  - id: 104
    title: Plain vs Blank
    modified: 2026-01-09T00:00:00Z
    date: 2026-03-03T12:00:00
    teams: [30, 40]
  - id: 105
    title: Hawks vs Owls
    modified: 2026-01-10T00:00:00Z
    date: 2026-02-12T20:00:00
    venue: Memorial Field
    permalink: https://league.example/event/105
    teams: [10, 20]
    results:
      - team: 10
        values: { r: "0" }
        outcomes:
          - title: Forfeit Loss
            abbreviation: F-L
      - team: 20
        values: { r: "9" }
        outcomes:
          - title: Forfeit Win
            abbreviation: F-W
"##;
