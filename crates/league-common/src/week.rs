//! ISO week selection for the admin event list.
//!
//! Weeks start on Monday: a selected week covers Monday 00:00:00 through
//! Sunday 23:59:59 in the site timezone.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static ISO_WEEK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-W(0[1-9]|[1-4][0-9]|5[0-3])$").expect("valid ISO week pattern")
});

/// Summary shown when no valid week is selected.
pub const NO_WEEK_SUMMARY: &str = "Select a week";

/// An ISO 8601 week such as `2026-W07`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

impl IsoWeek {
    /// Parse the `YYYY-Www` form produced by `<input type="week">`.
    ///
    /// Returns `None` for anything that does not name a real week, including
    /// week 53 of a year that only has 52.
    pub fn parse(raw: &str) -> Option<Self> {
        let caps = ISO_WEEK.captures(raw.trim())?;
        let year = caps[1].parse().ok()?;
        let week = caps[2].parse().ok()?;
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
        Some(Self { year, week })
    }

    pub fn monday(&self) -> NaiveDate {
        // Validated in `parse`; constructing by hand with an invalid week
        // falls back to the first ISO week of the year.
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
            .or_else(|| NaiveDate::from_isoywd_opt(self.year, 1, Weekday::Mon))
            .unwrap_or_default()
    }

    pub fn sunday(&self) -> NaiveDate {
        self.monday() + Duration::days(6)
    }

    /// Monday 00:00:00 through Sunday 23:59:59, site-local.
    pub fn naive_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.monday().and_time(NaiveTime::MIN);
        let end = self
            .sunday()
            .and_hms_opt(23, 59, 59)
            .unwrap_or_else(|| start + Duration::days(7) - Duration::seconds(1));
        (start, end)
    }

    /// The week's bounds localized to `tz`.
    pub fn range<Tz: TimeZone>(&self, tz: &Tz) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
        let (start, end) = self.naive_range();
        let start = tz.from_local_datetime(&start).earliest()?;
        let end = tz.from_local_datetime(&end).latest()?;
        Some((start, end))
    }

    /// Human-readable span, e.g. `Mon Feb 9, 2026 to Sun Feb 15, 2026`.
    pub fn summary(&self) -> String {
        format!(
            "{} to {}",
            self.monday().format("%a %b %-d, %Y"),
            self.sunday().format("%a %b %-d, %Y")
        )
    }

    pub fn date_query(&self) -> DateQuery {
        DateQuery {
            after: self.monday(),
            before: self.sunday(),
            inclusive: true,
        }
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Summary for an optional raw filter value.
pub fn week_summary(raw: Option<&str>) -> String {
    raw.and_then(IsoWeek::parse)
        .map(|w| w.summary())
        .unwrap_or_else(|| NO_WEEK_SUMMARY.to_string())
}

/// Date-granularity bounds applied to the event listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateQuery {
    pub after: NaiveDate,
    pub before: NaiveDate,
    pub inclusive: bool,
}

impl DateQuery {
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        let day = at.date();
        if self.inclusive {
            day >= self.after && day <= self.before
        } else {
            day > self.after && day < self.before
        }
    }
}
