//! Response shapes of the stats backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::date::DateKey;
use crate::records::{ExerciseKind, ExerciseRecord};

/// `null` and a missing field both read as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushupStat {
    pub date: DateKey,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningStat {
    pub date: DateKey,
    /// Seconds for the full 3 km.
    pub time: u32,
}

/// Weekly endpoint body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pushup_stats: Vec<PushupStat>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub running_stats: Vec<RunningStat>,
}

impl WeeklyResponse {
    /// Flatten into one record list, push-ups first.
    pub fn into_records(self) -> Vec<ExerciseRecord> {
        let pushups = self
            .pushup_stats
            .into_iter()
            .map(|s| ExerciseRecord::reps(s.date, ExerciseKind::Pushup, s.quantity));
        let runs = self
            .running_stats
            .into_iter()
            .map(|s| ExerciseRecord::duration(s.date, ExerciseKind::Run, s.time));
        pushups.chain(runs).collect()
    }
}

/// Daily detail endpoint body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyResponse {
    /// Rep times in seconds within the 0-120 s window.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pushup_tempo: Vec<f64>,
    /// 100 m split durations in seconds, 30 expected.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub running_tempo: Vec<f64>,
}
