//! HTTP client for the stats backend.
//!
//! One request per call. Retrying is left to whoever owns the transport.

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::wire::{DailyResponse, WeeklyResponse};
use crate::date::DateKey;
use crate::error::{FetchError, Result};
use crate::session::Session;

const WEEKLY_PATH: &str = "stats/weekly";
const DAILY_PATH: &str = "stats/daily";

/// Where weekly and daily session data comes from.
pub trait StatsSource {
    /// Last week of per-day results for the session's user.
    fn weekly(&self, session: &Session) -> impl Future<Output = Result<WeeklyResponse>> + Send;

    /// Raw tempo arrays for one day.
    fn daily(
        &self,
        session: &Session,
        date: DateKey,
    ) -> impl Future<Output = Result<DailyResponse>> + Send;
}

/// [`StatsSource`] backed by the REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    base_url: Url,
    http_client: Client,
}

impl HttpStatsSource {
    /// Create a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let mut base = base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base).map_err(FetchError::from)?;

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::from)?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, FetchError> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, session: &Session) -> Result<T, FetchError> {
        debug!(%url, "fetching");
        let mut request = self.http_client.get(url.clone());
        if let Some(token) = &session.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%url, bytes = body.len(), "fetched");
        Ok(serde_json::from_str(&body)?)
    }
}

impl StatsSource for HttpStatsSource {
    async fn weekly(&self, session: &Session) -> Result<WeeklyResponse> {
        let user = session.require_user()?;
        let url = self.endpoint(WEEKLY_PATH, &[("userId", user)])?;
        Ok(self.get_json(url, session).await?)
    }

    async fn daily(&self, session: &Session, date: DateKey) -> Result<DailyResponse> {
        let user = session.require_user()?;
        let date = date.to_string();
        let url = self.endpoint(DAILY_PATH, &[("userId", user), ("date", date.as_str())])?;
        Ok(self.get_json(url, session).await?)
    }
}
