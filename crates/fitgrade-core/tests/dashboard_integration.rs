//! Integration tests for the dashboard loader.
//!
//! This test file verifies:
//! - Missing identity yields a configuration error without fetching
//! - Fetch failures degrade to a "no data" panel
//! - A late daily response never replaces a newer selection

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Datelike;

use fitgrade_core::dashboard::{FETCH_FAILED_MESSAGE, NO_PUSHUP_MESSAGE};
use fitgrade_core::error::Result;
use fitgrade_core::{
    ApplyOutcome, DailyResponse, Dashboard, DateKey, FetchError, Grade, Loadable, Session,
    StatsSource, WeeklyResponse,
};

fn key(s: &str) -> DateKey {
    DateKey::parse(s).unwrap()
}

/// In-memory source. Requests for `slow_date` yield a few times before
/// answering so a later request can overtake them.
#[derive(Default)]
struct FakeSource {
    calls: Arc<AtomicUsize>,
    fail: bool,
    slow_date: Option<DateKey>,
}

impl StatsSource for FakeSource {
    async fn weekly(&self, _session: &Session) -> Result<WeeklyResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Status { status: 502, body: String::new() }.into());
        }
        Ok(serde_json::from_str(
            r#"{"pushupStats":[{"date":"2024-08-12","quantity":72}],"runningStats":[]}"#,
        )?)
    }

    async fn daily(&self, _session: &Session, date: DateKey) -> Result<DailyResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.slow_date == Some(date) {
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
        }
        // Each day gets a distinct rep count so results can be told apart.
        let reps = 40 + date.naive().day() as usize;
        Ok(DailyResponse {
            pushup_tempo: (0..reps).map(|i| i as f64).collect(),
            running_tempo: vec![],
        })
    }
}

#[tokio::test]
async fn test_missing_identity_skips_fetch() {
    let source = FakeSource::default();
    let calls = Arc::clone(&source.calls);
    let dash = Dashboard::new(source, Session::default());

    let weekly = dash.load_weekly(key("2024-08-12")).await;
    let daily = dash.load_daily(key("2024-08-12")).await;

    assert!(matches!(weekly, Loadable::ConfigurationError { .. }));
    assert!(matches!(daily, Loadable::ConfigurationError { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_blank_user_id_applies_configuration_error() {
    let source = FakeSource::default();
    let calls = Arc::clone(&source.calls);
    let dash = Dashboard::new(source, Session { user_id: Some(" ".into()), access_token: None });

    assert_eq!(dash.refresh_weekly(key("2024-08-12")).await, ApplyOutcome::Applied);
    assert!(matches!(dash.current_weekly(), Some(Loadable::ConfigurationError { .. })));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_no_data() {
    let source = FakeSource { fail: true, ..Default::default() };
    let dash = Dashboard::new(source, Session::new("u-1"));

    match dash.load_weekly(key("2024-08-12")).await {
        Loadable::NoData { message } => assert!(message.starts_with(FETCH_FAILED_MESSAGE)),
        other => panic!("expected no data, got {other:?}"),
    }
}

#[tokio::test]
async fn test_weekly_refresh_applies() {
    let dash = Dashboard::new(FakeSource::default(), Session::new("u-1"));
    assert_eq!(dash.refresh_weekly(key("2024-08-12")).await, ApplyOutcome::Applied);

    let current = dash.current_weekly().unwrap();
    let view = current.ready().unwrap();
    assert_eq!(view.pushup.points[6].value, Some(72));
    assert_eq!(view.running.sessions(), 0);
}

#[tokio::test]
async fn test_daily_view_has_grade_and_empty_running() {
    let dash = Dashboard::new(FakeSource::default(), Session::new("u-1"));
    // Day 12: 52 reps, all within the first minute.
    let view = dash.load_daily(key("2024-08-12")).await;
    let day = view.ready().unwrap();

    let pushup = day.pushup.ready().unwrap();
    assert_eq!(pushup.total_reps, 52);
    assert_eq!(pushup.grade, Grade::Third);
    assert!(!day.running.is_ready());
    assert_ne!(day.pushup, Loadable::no_data(NO_PUSHUP_MESSAGE));
}

#[tokio::test]
async fn test_late_response_for_old_selection_is_dropped() {
    let a = key("2024-08-10");
    let b = key("2024-08-20");
    let source = FakeSource { slow_date: Some(a), ..Default::default() };
    let dash = Dashboard::new(source, Session::new("u-1"));

    let (first, second) = tokio::join!(dash.select_day(a), dash.select_day(b));

    assert_eq!(first, ApplyOutcome::Stale);
    assert_eq!(second, ApplyOutcome::Applied);

    let current = dash.current_day().unwrap();
    let day = current.ready().unwrap();
    assert_eq!(day.date, b);
    assert_eq!(day.pushup.ready().unwrap().total_reps, 60);
}

#[tokio::test]
async fn test_sequential_selections_keep_latest() {
    let dash = Dashboard::new(FakeSource::default(), Session::new("u-1"));
    assert_eq!(dash.select_day(key("2024-08-01")).await, ApplyOutcome::Applied);
    assert_eq!(dash.select_day(key("2024-08-02")).await, ApplyOutcome::Applied);
    assert_eq!(dash.current_day().unwrap().ready().unwrap().date, key("2024-08-02"));
}
