//! Dashboard view model
//!
//! Fans out the recent-reservations fetch and the personalized summary
//! fetch concurrently; each side succeeds or fails on its own, with its
//! own fallback.

use crate::api::{DashboardApi, ReservationsApi};
use crate::controller::list::{ListController, LoadState};
use crate::controller::reservations::{recent_reservations, ReservationSource};
use crate::fallback;
use crate::session::Session;
use shared::models::DashboardSummary;

pub struct DashboardController {
    api: DashboardApi,
    /// Recent-reservations list, with the dashboard's substitute-on-empty
    /// policy.
    pub reservations: ListController<ReservationSource>,
    summary: DashboardSummary,
    summary_state: LoadState,
    summary_error: Option<String>,
}

impl DashboardController {
    pub fn new(dashboard_api: DashboardApi, reservations_api: ReservationsApi) -> Self {
        Self {
            api: dashboard_api,
            reservations: recent_reservations(reservations_api),
            summary: DashboardSummary::default(),
            summary_state: LoadState::Idle,
            summary_error: None,
        }
    }

    /// Load both halves of the page concurrently. Without a persisted
    /// partner id the summary call is skipped outright and the fallback
    /// summary is shown - a deliberate fast-fail, not a retry condition.
    pub async fn load(&mut self, session: &Session) {
        self.summary_state = LoadState::Loading;
        let (_, summary) = tokio::join!(
            self.reservations.load(),
            Self::fetch_summary(&self.api, session.partner_id()),
        );
        let (summary, error, state) = summary;
        self.summary = summary;
        self.summary_error = error;
        self.summary_state = state;
    }

    async fn fetch_summary(
        api: &DashboardApi,
        partner_id: Option<&str>,
    ) -> (DashboardSummary, Option<String>, LoadState) {
        let Some(partner_id) = partner_id else {
            return (
                fallback::dashboard_summary(),
                Some("Partner ID not found. Showing default summary.".to_string()),
                LoadState::Errored,
            );
        };

        match api.summary(partner_id).await {
            Ok(summary) => (summary, None, LoadState::Loaded),
            Err(err) => {
                tracing::error!(error = %err, "dashboard summary fetch failed");
                (
                    fallback::dashboard_summary(),
                    Some("Unable to load live summary. Showing default summary.".to_string()),
                    LoadState::Errored,
                )
            }
        }
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    pub fn summary_state(&self) -> LoadState {
        self.summary_state
    }

    pub fn summary_error(&self) -> Option<&str> {
        self.summary_error.as_deref()
    }
}
