//! Tier-based grade classification.
//!
//! Tier tables are ordered best to worst and evaluated top-down. The first
//! tier whose boundary is satisfied wins; a value matching no tier is
//! [`Grade::Fail`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::records::ExerciseKind;

/// Performance bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "특급")]
    Elite,
    #[serde(rename = "1급")]
    First,
    #[serde(rename = "2급")]
    Second,
    #[serde(rename = "3급")]
    Third,
    #[serde(rename = "불합격")]
    Fail,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::Elite => "특급",
            Grade::First => "1급",
            Grade::Second => "2급",
            Grade::Third => "3급",
            Grade::Fail => "불합격",
        }
    }

    pub fn is_pass(&self) -> bool {
        !matches!(self, Grade::Fail)
    }

    /// Headline shown above a day's record, e.g. "1급 입니다 🎉".
    pub fn headline(&self) -> String {
        if self.is_pass() {
            format!("{} 입니다 🎉", self.label())
        } else {
            format!("{} 입니다", self.label())
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a tier boundary is compared against a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Higher is better: matches when `boundary <= value`.
    MinInclusive,
    /// Lower is better: matches when `value <= boundary`.
    MaxInclusive,
}

impl Direction {
    pub fn satisfied(&self, value: f64, boundary: f64) -> bool {
        match self {
            Direction::MinInclusive => boundary <= value,
            Direction::MaxInclusive => value <= boundary,
        }
    }
}

/// One row of a tier table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeTier {
    pub grade: Grade,
    pub boundary: f64,
    pub direction: Direction,
    /// Reference-line color on the weekly chart.
    pub color: &'static str,
}

/// Push-up count for two minutes.
pub const PUSHUP_TIERS: &[GradeTier] = &[
    GradeTier { grade: Grade::Elite, boundary: 72.0, direction: Direction::MinInclusive, color: "#3498db" },
    GradeTier { grade: Grade::First, boundary: 64.0, direction: Direction::MinInclusive, color: "#2ecc71" },
    GradeTier { grade: Grade::Second, boundary: 56.0, direction: Direction::MinInclusive, color: "#f39c12" },
    GradeTier { grade: Grade::Third, boundary: 48.0, direction: Direction::MinInclusive, color: "#ff7979" },
];

/// Seconds to finish 3 km.
pub const RUNNING_TIERS: &[GradeTier] = &[
    GradeTier { grade: Grade::Elite, boundary: 750.0, direction: Direction::MaxInclusive, color: "#3498db" },
    GradeTier { grade: Grade::First, boundary: 812.0, direction: Direction::MaxInclusive, color: "#2ecc71" },
    GradeTier { grade: Grade::Second, boundary: 874.0, direction: Direction::MaxInclusive, color: "#f39c12" },
    GradeTier { grade: Grade::Third, boundary: 936.0, direction: Direction::MaxInclusive, color: "#ff7979" },
];

/// Tier table for a kind. Sit-ups are not graded.
pub fn tiers_for(kind: ExerciseKind) -> Option<&'static [GradeTier]> {
    match kind {
        ExerciseKind::Pushup => Some(PUSHUP_TIERS),
        ExerciseKind::Run => Some(RUNNING_TIERS),
        ExerciseKind::Situp => None,
    }
}

/// Classify `value` against `tiers`, first match wins.
pub fn classify(value: f64, tiers: &[GradeTier]) -> Grade {
    tiers
        .iter()
        .find(|tier| tier.direction.satisfied(value, tier.boundary))
        .map(|tier| tier.grade)
        .unwrap_or(Grade::Fail)
}

/// Classify a value for `kind`; `None` if the kind has no table.
pub fn classify_kind(kind: ExerciseKind, value: f64) -> Option<Grade> {
    tiers_for(kind).map(|tiers| classify(value, tiers))
}

/// Chart reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: &'static str,
    pub color: &'static str,
}

/// Reference lines ordered worst to best, the order the chart axis ticks use.
pub fn reference_lines(tiers: &[GradeTier]) -> Vec<ReferenceLine> {
    tiers
        .iter()
        .rev()
        .map(|tier| ReferenceLine {
            value: tier.boundary,
            label: tier.grade.label(),
            color: tier.color,
        })
        .collect()
}
