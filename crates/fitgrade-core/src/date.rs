//! Calendar-day identity.
//!
//! Every "which day does this session belong to" decision goes through
//! [`normalize`]. The backend stores sessions in KST, so an instant is shifted
//! by a fixed +09:00 before being truncated to a date. The shift does not
//! depend on the local timezone of the machine and never observes DST.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Fixed offset applied before truncating an instant to a calendar day.
pub const DAY_BOUNDARY_OFFSET_HOURS: i64 = 9;

/// A calendar day, formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Build a key from year, month and day. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a strict `YYYY-MM-DD` key.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidDate {
            value: value.to_string(),
        };
        if value.len() != 10 {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| invalid())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Shift by `days` (negative goes back). Saturates at the chrono date range.
    pub fn offset_days(self, days: i64) -> Self {
        match self.0.checked_add_signed(Duration::days(days)) {
            Some(date) => Self(date),
            None if days < 0 => Self(NaiveDate::MIN),
            None => Self(NaiveDate::MAX),
        }
    }

    /// `MM.DD`, used for chart axis labels.
    pub fn short_label(&self) -> String {
        self.0.format("%m.%d").to_string()
    }

    /// Whether both keys fall in the same calendar month.
    pub fn same_month(&self, other: &DateKey) -> bool {
        self.0.year() == other.0.year() && self.0.month() == other.0.month()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Map an instant to its calendar day under the fixed +09:00 offset.
pub fn normalize(instant: DateTime<Utc>) -> DateKey {
    DateKey((instant + Duration::hours(DAY_BOUNDARY_OFFSET_HOURS)).date_naive())
}

/// "Today" as seen by the backend.
pub fn today() -> DateKey {
    today_at(Utc::now())
}

/// "Today" relative to an explicit clock reading.
pub fn today_at(now: DateTime<Utc>) -> DateKey {
    normalize(now)
}

/// `MM.DD - MM.DD` label for the 7-day window ending at `today`.
pub fn week_range_label(today: DateKey) -> String {
    format!(
        "{} - {}",
        today.offset_days(-6).short_label(),
        today.short_label()
    )
}

/// Calendar tiles outside the current month are disabled.
pub fn is_selectable(date: DateKey, today: DateKey) -> bool {
    date.same_month(&today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn normalize_shifts_into_next_day_after_15_utc() {
        let late = Utc.with_ymd_and_hms(2024, 8, 11, 15, 0, 0).unwrap();
        assert_eq!(normalize(late), key("2024-08-12"));

        let early = Utc.with_ymd_and_hms(2024, 8, 11, 14, 59, 59).unwrap();
        assert_eq!(normalize(early), key("2024-08-11"));
    }

    #[test]
    fn normalize_ignores_dst_season() {
        // Same wall-clock UTC hour in January and July lands on the same relative day.
        let winter = Utc.with_ymd_and_hms(2024, 1, 10, 20, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 10, 20, 0, 0).unwrap();
        assert_eq!(normalize(winter), key("2024-01-11"));
        assert_eq!(normalize(summer), key("2024-07-11"));
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert!(DateKey::parse("2024-8-1").is_err());
        assert!(DateKey::parse("2024-02-30").is_err());
        assert!(DateKey::parse("20240801").is_err());
        assert!(DateKey::parse("").is_err());
    }

    #[test]
    fn display_round_trips() {
        let k = key("2024-08-06");
        assert_eq!(k.to_string(), "2024-08-06");
        assert_eq!(k.to_string().parse::<DateKey>().unwrap(), k);
    }

    #[test]
    fn serde_uses_plain_date_string() {
        let k = key("2024-08-06");
        assert_eq!(serde_json::to_string(&k).unwrap(), "\"2024-08-06\"");
        let back: DateKey = serde_json::from_str("\"2024-08-06\"").unwrap();
        assert_eq!(back, k);
    }

    #[test]
    fn offset_days_crosses_month_and_year() {
        assert_eq!(key("2024-03-01").offset_days(-1), key("2024-02-29"));
        assert_eq!(key("2024-12-31").offset_days(1), key("2025-01-01"));
    }

    #[test]
    fn week_range_label_matches_chart_header() {
        assert_eq!(week_range_label(key("2024-08-12")), "08.06 - 08.12");
    }

    #[test]
    fn only_current_month_is_selectable() {
        let today = key("2024-08-12");
        assert!(is_selectable(key("2024-08-01"), today));
        assert!(is_selectable(key("2024-08-31"), today));
        assert!(!is_selectable(key("2024-07-31"), today));
        assert!(!is_selectable(key("2023-08-12"), today));
    }
}
