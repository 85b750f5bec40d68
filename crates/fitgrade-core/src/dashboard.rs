//! View-models for the weekly chart, calendar and daily record panels.
//!
//! [`WeeklyView`] and [`DailyView`] are pure functions of already-fetched
//! data. [`Dashboard`] wires a [`StatsSource`] to them, maps failures to
//! [`Loadable`] states, and routes daily results through a
//! [`SelectionGuard`] so a late response never replaces a newer selection.

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{DailyResponse, StatsSource, WeeklyResponse};
use crate::date::DateKey;
use crate::error::CoreError;
use crate::grade::{self, Grade, ReferenceLine, PUSHUP_TIERS, RUNNING_TIERS};
use crate::records::{ExerciseKind, ExerciseRecord, IntervalBucket};
use crate::session::{ApplyOutcome, SelectionGuard, Session};
use crate::stats::{
    self, PresenceIndex, WeeklySummary, WeeklySummaryBuilder, PUSHUP_TEMPO_BOUNDARIES,
};

/// Shown when the backend could not be reached or returned garbage.
pub const FETCH_FAILED_MESSAGE: &str = "운동 기록을 불러올 수 없습니다.";
/// Shown when the day has no usable push-up tempo.
pub const NO_PUSHUP_MESSAGE: &str = "팔굽혀펴기 기록이 없습니다.";
/// Shown when the day has no usable running splits.
pub const NO_RUNNING_MESSAGE: &str = "달리기 기록이 없습니다.";
/// Shown when no user id is configured.
pub const MISSING_USER_MESSAGE: &str = "사용자 정보가 설정되지 않았습니다.";

/// A panel's content, or the reason it has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Loadable<T> {
    Ready(T),
    NoData { message: String },
    ConfigurationError { message: String },
}

impl<T> Loadable<T> {
    pub fn no_data(message: impl Into<String>) -> Self {
        Loadable::NoData {
            message: message.into(),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Loadable::Ready(_))
    }

    /// Map a failed load to the state the user sees.
    pub fn from_error(err: &CoreError) -> Self {
        match err {
            CoreError::MissingIdentity => Loadable::ConfigurationError {
                message: MISSING_USER_MESSAGE.to_string(),
            },
            CoreError::Config(e) => Loadable::ConfigurationError {
                message: e.to_string(),
            },
            other => Loadable::NoData {
                message: format!("{FETCH_FAILED_MESSAGE} ({other})"),
            },
        }
    }
}

/// Last seven days of push-ups and runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyView {
    pub today: DateKey,
    pub range_label: String,
    pub pushup: WeeklySummary,
    pub running: WeeklySummary,
    pub presence: PresenceIndex,
    pub pushup_reference_lines: Vec<ReferenceLine>,
    pub running_reference_lines: Vec<ReferenceLine>,
}

impl WeeklyView {
    pub fn build(records: &[ExerciseRecord], today: DateKey) -> Self {
        let pushup = WeeklySummaryBuilder::new(ExerciseKind::Pushup).build(records, today);
        Self {
            today,
            range_label: pushup.range_label(),
            running: WeeklySummaryBuilder::new(ExerciseKind::Run).build(records, today),
            pushup,
            presence: PresenceIndex::from_records(records),
            pushup_reference_lines: grade::reference_lines(PUSHUP_TIERS),
            running_reference_lines: grade::reference_lines(RUNNING_TIERS),
        }
    }

    pub fn from_response(response: WeeklyResponse, today: DateKey) -> Self {
        Self::build(&response.into_records(), today)
    }
}

/// Push-up tempo for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PushupDetail {
    pub buckets: Vec<IntervalBucket>,
    pub total_reps: u32,
    pub duration_label: String,
    pub grade: Grade,
}

/// Per-kilometer breakdown of one 3 km run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunningDetail {
    pub per_km: [f64; 3],
    pub paces: Vec<String>,
    pub total_seconds: f64,
    pub total_label: String,
    pub average_pace: String,
    pub grade: Grade,
}

/// Everything shown for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyView {
    pub date: DateKey,
    pub pushup: Loadable<PushupDetail>,
    pub running: Loadable<RunningDetail>,
}

impl DailyView {
    pub fn build(date: DateKey, response: &DailyResponse) -> Self {
        Self {
            date,
            pushup: pushup_detail(&response.pushup_tempo),
            running: running_detail(&response.running_tempo),
        }
    }
}

fn pushup_detail(offsets: &[f64]) -> Loadable<PushupDetail> {
    if offsets.is_empty() {
        return Loadable::no_data(NO_PUSHUP_MESSAGE);
    }
    match stats::pushup_tempo(offsets) {
        Ok(buckets) => {
            let total_reps: u32 = buckets.iter().filter_map(|b| b.count()).sum();
            // No rep inside the two-minute window is the same as no session.
            if total_reps == 0 {
                warn!(offsets = offsets.len(), "push-up tempo has no reps inside the window");
                return Loadable::no_data(NO_PUSHUP_MESSAGE);
            }
            let domain = PUSHUP_TEMPO_BOUNDARIES[PUSHUP_TEMPO_BOUNDARIES.len() - 1];
            Loadable::Ready(PushupDetail {
                total_reps,
                duration_label: stats::format_clock(domain),
                grade: grade::classify(f64::from(total_reps), PUSHUP_TIERS),
                buckets,
            })
        }
        Err(err) => {
            warn!(%err, "push-up tempo could not be bucketed");
            Loadable::no_data(NO_PUSHUP_MESSAGE)
        }
    }
}

fn running_detail(splits: &[f64]) -> Loadable<RunningDetail> {
    match stats::per_kilometer_splits(splits) {
        Ok(per_km) => {
            let total_seconds: f64 = per_km.iter().sum();
            let average = stats::average_pace(&per_km).unwrap_or_default();
            Loadable::Ready(RunningDetail {
                paces: per_km.iter().map(|&s| stats::format_pace(s)).collect(),
                total_label: stats::format_clock(total_seconds),
                average_pace: stats::format_pace(average),
                grade: grade::classify(total_seconds, RUNNING_TIERS),
                total_seconds,
                per_km,
            })
        }
        Err(err) => {
            if !splits.is_empty() {
                warn!(%err, "running splits treated as no data");
            }
            Loadable::no_data(NO_RUNNING_MESSAGE)
        }
    }
}

/// Loads view-models for one session.
pub struct Dashboard<S> {
    source: S,
    session: Session,
    weekly: SelectionGuard<Loadable<WeeklyView>>,
    daily: SelectionGuard<Loadable<DailyView>>,
}

impl<S: StatsSource> Dashboard<S> {
    pub fn new(source: S, session: Session) -> Self {
        Self {
            source,
            session,
            weekly: SelectionGuard::new(),
            daily: SelectionGuard::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Fetch and build the weekly view. Does not touch the guarded state.
    pub async fn load_weekly(&self, today: DateKey) -> Loadable<WeeklyView> {
        if let Err(err) = self.session.require_user() {
            return Loadable::from_error(&err);
        }
        match self.source.weekly(&self.session).await {
            Ok(response) => Loadable::Ready(WeeklyView::from_response(response, today)),
            Err(err) => {
                warn!(%err, "weekly stats unavailable");
                Loadable::from_error(&err)
            }
        }
    }

    /// Fetch and build one day's view. Does not touch the guarded state.
    pub async fn load_daily(&self, date: DateKey) -> Loadable<DailyView> {
        if let Err(err) = self.session.require_user() {
            return Loadable::from_error(&err);
        }
        match self.source.daily(&self.session, date).await {
            Ok(response) => Loadable::Ready(DailyView::build(date, &response)),
            Err(err) => {
                warn!(%err, %date, "daily stats unavailable");
                Loadable::from_error(&err)
            }
        }
    }

    /// Switch the weekly tab to `today`, applying the result only if no newer
    /// refresh started meanwhile.
    pub async fn refresh_weekly(&self, today: DateKey) -> ApplyOutcome {
        let token = self.weekly.begin();
        let view = self.load_weekly(today).await;
        self.weekly.apply(token, view)
    }

    /// Select a calendar day, applying its result only if it is still the
    /// selected day when the fetch completes.
    pub async fn select_day(&self, date: DateKey) -> ApplyOutcome {
        let token = self.daily.begin();
        debug!(%date, "day selected");
        let view = self.load_daily(date).await;
        self.daily.apply(token, view)
    }

    pub fn current_weekly(&self) -> Option<Loadable<WeeklyView>> {
        self.weekly.current()
    }

    pub fn current_day(&self) -> Option<Loadable<DailyView>> {
        self.daily.current()
    }
}
