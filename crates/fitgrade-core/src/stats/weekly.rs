//! Gap-filled 7-day series.
//!
//! A weekly summary always covers `today-6 ..= today`. Days without a record
//! of the builder's kind carry `None`, never zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::date::{self, DateKey};
use crate::grade::{self, Direction, Grade};
use crate::records::{ExerciseKind, ExerciseRecord, WeeklyPoint};

/// Number of days in a weekly summary.
pub const WEEK_LEN: usize = 7;

/// Seven contiguous days ending at `today`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub kind: ExerciseKind,
    pub today: DateKey,
    pub points: [WeeklyPoint; WEEK_LEN],
}

impl WeeklySummary {
    /// `MM.DD - MM.DD` header for the chart.
    pub fn range_label(&self) -> String {
        date::week_range_label(self.today)
    }

    /// Days that had a session.
    pub fn sessions(&self) -> usize {
        self.points.iter().filter(|p| p.value.is_some()).count()
    }

    /// Best value of the week: most reps, or fastest time for timed kinds.
    pub fn best(&self) -> Option<u32> {
        let values = self.points.iter().filter_map(|p| p.value);
        match grade::tiers_for(self.kind).and_then(|t| t.first()).map(|t| t.direction) {
            Some(Direction::MaxInclusive) => values.min(),
            _ => values.max(),
        }
    }

    /// Grade per day; `None` for days without a session or kinds without a table.
    pub fn grades(&self) -> Vec<(DateKey, Option<Grade>)> {
        self.points
            .iter()
            .map(|p| {
                let grade = p
                    .value
                    .and_then(|v| grade::classify_kind(self.kind, f64::from(v)));
                (p.date, grade)
            })
            .collect()
    }
}

/// Builds [`WeeklySummary`] values for one exercise kind.
#[derive(Debug, Clone, Copy)]
pub struct WeeklySummaryBuilder {
    pub kind: ExerciseKind,
}

impl WeeklySummaryBuilder {
    pub fn new(kind: ExerciseKind) -> Self {
        Self { kind }
    }

    /// Build the 7-day series ending at `today`.
    ///
    /// Records of other kinds are ignored. If a date appears more than once the
    /// last record wins.
    pub fn build(&self, records: &[ExerciseRecord], today: DateKey) -> WeeklySummary {
        let by_date: HashMap<DateKey, u32> = records
            .iter()
            .filter(|r| r.kind == self.kind)
            .map(|r| (r.date, r.value.amount()))
            .collect();

        let points = std::array::from_fn(|i| {
            let date = today.offset_days(i as i64 - (WEEK_LEN as i64 - 1));
            WeeklyPoint {
                date,
                value: by_date.get(&date).copied(),
            }
        });

        let summary = WeeklySummary {
            kind: self.kind,
            today,
            points,
        };
        debug!(
            kind = %self.kind,
            %today,
            records = records.len(),
            sessions = summary.sessions(),
            "built weekly summary"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn fills_missing_days_with_none() {
        let records = vec![
            ExerciseRecord::reps(key("2024-08-06"), ExerciseKind::Pushup, 48),
            ExerciseRecord::reps(key("2024-08-09"), ExerciseKind::Pushup, 72),
            ExerciseRecord::reps(key("2024-08-12"), ExerciseKind::Pushup, 0),
        ];
        let summary = WeeklySummaryBuilder::new(ExerciseKind::Pushup).build(&records, key("2024-08-12"));

        let values: Vec<Option<u32>> = summary.points.iter().map(|p| p.value).collect();
        assert_eq!(
            values,
            vec![Some(48), None, None, Some(72), None, None, Some(0)]
        );
        assert_eq!(summary.points[0].date, key("2024-08-06"));
        assert_eq!(summary.points[6].date, key("2024-08-12"));
    }

    #[test]
    fn ignores_other_kinds_and_out_of_range_dates() {
        let records = vec![
            ExerciseRecord::duration(key("2024-08-10"), ExerciseKind::Run, 800),
            ExerciseRecord::reps(key("2024-08-01"), ExerciseKind::Pushup, 60),
            ExerciseRecord::reps(key("2024-08-13"), ExerciseKind::Pushup, 60),
        ];
        let summary = WeeklySummaryBuilder::new(ExerciseKind::Pushup).build(&records, key("2024-08-12"));
        assert!(summary.points.iter().all(|p| p.value.is_none()));
        assert_eq!(summary.sessions(), 0);
    }

    #[test]
    fn duplicate_dates_last_write_wins() {
        let records = vec![
            ExerciseRecord::reps(key("2024-08-12"), ExerciseKind::Pushup, 50),
            ExerciseRecord::reps(key("2024-08-12"), ExerciseKind::Pushup, 65),
        ];
        let summary = WeeklySummaryBuilder::new(ExerciseKind::Pushup).build(&records, key("2024-08-12"));
        assert_eq!(summary.points[6].value, Some(65));
    }

    #[test]
    fn best_depends_on_direction() {
        let today = key("2024-08-12");
        let pushups = vec![
            ExerciseRecord::reps(key("2024-08-10"), ExerciseKind::Pushup, 50),
            ExerciseRecord::reps(key("2024-08-11"), ExerciseKind::Pushup, 70),
        ];
        let runs = vec![
            ExerciseRecord::duration(key("2024-08-10"), ExerciseKind::Run, 900),
            ExerciseRecord::duration(key("2024-08-11"), ExerciseKind::Run, 800),
        ];
        assert_eq!(WeeklySummaryBuilder::new(ExerciseKind::Pushup).build(&pushups, today).best(), Some(70));
        assert_eq!(WeeklySummaryBuilder::new(ExerciseKind::Run).build(&runs, today).best(), Some(800));
    }

    #[test]
    fn grades_skip_empty_days() {
        let today = key("2024-08-12");
        let records = vec![ExerciseRecord::duration(today, ExerciseKind::Run, 751)];
        let grades = WeeklySummaryBuilder::new(ExerciseKind::Run).build(&records, today).grades();
        assert_eq!(grades.len(), 7);
        assert_eq!(grades[5].1, None);
        assert_eq!(grades[6], (today, Some(Grade::First)));
    }

    #[test]
    fn range_label_spans_the_week() {
        let summary = WeeklySummaryBuilder::new(ExerciseKind::Pushup).build(&[], key("2024-08-12"));
        assert_eq!(summary.range_label(), "08.06 - 08.12");
    }
}
