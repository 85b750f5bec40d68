//! Exercise records and the derived view types built from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date::DateKey;
use crate::error::ValidationError;

/// Kind of exercise a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Pushup,
    Run,
    Situp,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [ExerciseKind::Pushup, ExerciseKind::Run, ExerciseKind::Situp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::Run => "run",
            ExerciseKind::Situp => "situp",
        }
    }

    /// Korean display name used in tooltips and summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::Pushup => "팔굽혀펴기",
            ExerciseKind::Run => "3km 달리기",
            ExerciseKind::Situp => "윗몸일으키기",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pushup" | "pushups" => Ok(ExerciseKind::Pushup),
            "run" | "running" => Ok(ExerciseKind::Run),
            "situp" | "situps" => Ok(ExerciseKind::Situp),
            _ => Err(ValidationError::UnknownKind(s.to_string())),
        }
    }
}

/// The single measured quantity of a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordValue {
    RepCount(u32),
    DurationSeconds(u32),
}

impl RecordValue {
    pub fn amount(&self) -> u32 {
        match self {
            RecordValue::RepCount(n) | RecordValue::DurationSeconds(n) => *n,
        }
    }
}

/// One day's result for one exercise kind, as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub date: DateKey,
    pub kind: ExerciseKind,
    pub value: RecordValue,
}

impl ExerciseRecord {
    pub fn reps(date: DateKey, kind: ExerciseKind, count: u32) -> Self {
        Self {
            date,
            kind,
            value: RecordValue::RepCount(count),
        }
    }

    pub fn duration(date: DateKey, kind: ExerciseKind, seconds: u32) -> Self {
        Self {
            date,
            kind,
            value: RecordValue::DurationSeconds(seconds),
        }
    }
}

/// One day of a gap-filled weekly series.
///
/// `value == None` means no session that day; it is never collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPoint {
    pub date: DateKey,
    pub value: Option<u32>,
}

impl WeeklyPoint {
    /// Tooltip text: the number, or "운동 안 함" for a day without a session.
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => v.to_string(),
            None => "운동 안 함".to_string(),
        }
    }
}

/// Aggregated metric for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketMetric {
    Count(u32),
    DurationSum(f64),
}

/// One slice of a bounded session timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBucket {
    pub start_offset_seconds: f64,
    pub end_offset_seconds: f64,
    pub metric: BucketMetric,
}

impl IntervalBucket {
    /// Event count, or `None` for duration buckets.
    pub fn count(&self) -> Option<u32> {
        match self.metric {
            BucketMetric::Count(n) => Some(n),
            BucketMetric::DurationSum(_) => None,
        }
    }

    /// Axis label such as `0-30s`.
    pub fn label(&self) -> String {
        format!("{}-{}s", self.start_offset_seconds, self.end_offset_seconds)
    }
}
