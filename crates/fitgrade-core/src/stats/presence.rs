//! Per-day presence flags for calendar markers.
//!
//! Each (date, kind) pair is its own flag. A day with both a push-up and a run
//! session carries two markers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::date::DateKey;
use crate::records::{ExerciseKind, ExerciseRecord};

/// A session of `kind` happened on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PresenceFlag {
    pub date: DateKey,
    pub kind: ExerciseKind,
}

/// Set of presence flags, ordered by date then kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceIndex {
    flags: BTreeSet<PresenceFlag>,
}

impl PresenceIndex {
    pub fn from_records(records: &[ExerciseRecord]) -> Self {
        Self {
            flags: records
                .iter()
                .map(|r| PresenceFlag {
                    date: r.date,
                    kind: r.kind,
                })
                .collect(),
        }
    }

    pub fn contains(&self, date: DateKey, kind: ExerciseKind) -> bool {
        self.flags.contains(&PresenceFlag { date, kind })
    }

    /// Kinds with a marker on `date`.
    pub fn kinds_on(&self, date: DateKey) -> Vec<ExerciseKind> {
        ExerciseKind::ALL
            .into_iter()
            .filter(|&kind| self.contains(date, kind))
            .collect()
    }

    /// Dates with a marker for `kind`, ascending.
    pub fn dates_for(&self, kind: ExerciseKind) -> Vec<DateKey> {
        self.flags
            .iter()
            .filter(|f| f.kind == kind)
            .map(|f| f.date)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PresenceFlag> {
        self.flags.iter()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
