//! # Fitgrade Core Library
//!
//! Aggregation and grading engine behind the fitness dashboard. Raw per-day
//! results and per-session tempo arrays come in from the stats backend; chart
//! series, tempo histograms, per-kilometer splits and pass/fail grades come
//! out. Every transformation is a pure function of its inputs so the CLI and
//! any other front end share the same behavior.
//!
//! ## Architecture
//!
//! - **Dates**: Calendar-day keys on a fixed +9h day boundary
//! - **Stats**: Weekly gap-filled series, tempo windows, split chunking and
//!   calendar presence
//! - **Grading**: Ordered tier tables for push-ups and the 3 km run
//! - **API**: `StatsSource` trait and its REST implementation
//! - **Dashboard**: View-models plus a staleness guard for concurrent loads
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`WeeklySummaryBuilder`]: Seven-point series ending today
//! - [`count_by_window`]: Offset histogram over ascending boundaries
//! - [`sum_chunks`]: Fixed-size chunk sums with length validation
//! - [`classify`]: Tier lookup, first match wins
//! - [`Dashboard`]: Loads weekly and daily views through a [`StatsSource`]
//! - [`Config`]: Application configuration management

pub mod api;
pub mod dashboard;
pub mod date;
pub mod error;
pub mod grade;
pub mod records;
pub mod session;
pub mod stats;
pub mod storage;

pub use api::{DailyResponse, HttpStatsSource, StatsSource, WeeklyResponse};
pub use dashboard::{Dashboard, DailyView, Loadable, PushupDetail, RunningDetail, WeeklyView};
pub use date::DateKey;
pub use error::{ConfigError, CoreError, FetchError, MalformedInputError, ValidationError};
pub use grade::{classify, Direction, Grade, GradeTier, PUSHUP_TIERS, RUNNING_TIERS};
pub use records::{BucketMetric, ExerciseKind, ExerciseRecord, IntervalBucket, RecordValue, WeeklyPoint};
pub use session::{ApplyOutcome, SelectionGuard, SelectionToken, Session};
pub use stats::{count_by_window, sum_chunks, PresenceIndex, WeeklySummary, WeeklySummaryBuilder};
pub use storage::Config;
