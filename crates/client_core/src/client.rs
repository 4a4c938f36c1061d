use async_trait::async_trait;
use reqwest::header;
use shared::protocol::WeeklyPlanResponse;
use tracing::debug;

use crate::{cancel::CancelToken, error::FetchError};

/// Fixed endpoint path, appended verbatim to the configured base URL.
pub const WEEKLY_PLAN_PATH: &str = "/api/weekly-plan";

/// Anything the controller can fetch a weekly plan from.
///
/// `WeeklyPlanClient` is the HTTP implementation; tests substitute scripted
/// sources to drive the controller deterministically.
#[async_trait]
pub trait PlanSource: Send + Sync {
    async fn fetch_weekly_plan(
        &self,
        cancel: CancelToken,
    ) -> Result<WeeklyPlanResponse, FetchError>;
}

pub struct WeeklyPlanClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeeklyPlanClient {
    /// `base_url` is injected by the caller; the library never reads the
    /// environment itself.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Same as [`WeeklyPlanClient::new`] but reusing an existing pool.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_plan(&self) -> Result<WeeklyPlanResponse, FetchError> {
        let url = format!("{}{WEEKLY_PLAN_PATH}", self.base_url);
        debug!(%url, "requesting weekly plan");
        let plan = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::from_reqwest)?
            .error_for_status()
            .map_err(FetchError::from_reqwest)?
            .json::<WeeklyPlanResponse>()
            .await
            .map_err(FetchError::from_reqwest)?;
        Ok(plan)
    }
}

#[async_trait]
impl PlanSource for WeeklyPlanClient {
    /// Races the request against `cancel`. A cancelled fetch drops the
    /// connection and yields [`FetchError::Cancelled`], never a plan and
    /// never a transport error.
    async fn fetch_weekly_plan(
        &self,
        mut cancel: CancelToken,
    ) -> Result<WeeklyPlanResponse, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        tokio::select! {
            outcome = self.request_plan() => outcome,
            _ = cancel.cancelled() => {
                debug!("weekly plan fetch aborted");
                Err(FetchError::Cancelled)
            }
        }
    }
}
