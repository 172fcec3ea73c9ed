//! Reservation page wirings
//!
//! The four reservation screens are the same controller configured with
//! different fallback data, empty-array policy and initial filter.

use crate::api::ReservationsApi;
use crate::controller::list::{
    EmptyPolicy, ListConfig, ListController, ListSource, MutableListSource, StatusFilter,
};
use crate::error::ClientResult;
use crate::fallback;
use async_trait::async_trait;
use shared::models::{Reservation, ReservationStatus};

/// `/reservations`-backed list source.
#[derive(Debug, Clone)]
pub struct ReservationSource {
    api: ReservationsApi,
}

impl ReservationSource {
    pub fn new(api: ReservationsApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ListSource for ReservationSource {
    type Item = Reservation;

    async fn fetch(&self) -> ClientResult<Vec<Reservation>> {
        self.api.list().await
    }
}

#[async_trait]
impl MutableListSource for ReservationSource {
    async fn update_status(&self, id: &str, status: ReservationStatus) -> ClientResult<()> {
        self.api.update_status(id, status).await
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(id).await
    }
}

/// Main reservations table: fallback on error, empty list is valid.
pub fn reservations_page(api: ReservationsApi) -> ListController<ReservationSource> {
    ListController::new(
        ReservationSource::new(api),
        ListConfig {
            fallback: fallback::reservations(),
            empty_policy: EmptyPolicy::Accept,
            warning: "Unable to load live reservations. Showing fallback data.",
            initial_filter: StatusFilter::All,
        },
    )
}

/// Pending view: pre-filtered, no fallback rows; failure only shows the
/// warning.
pub fn pending_page(api: ReservationsApi) -> ListController<ReservationSource> {
    ListController::new(
        ReservationSource::new(api),
        ListConfig {
            fallback: Vec::new(),
            empty_policy: EmptyPolicy::Accept,
            warning: "Unable to load reservations.",
            initial_filter: ReservationStatus::Pending.into(),
        },
    )
}

/// Cancelled view: pre-filtered with its own fallback rows.
pub fn cancelled_page(api: ReservationsApi) -> ListController<ReservationSource> {
    ListController::new(
        ReservationSource::new(api),
        ListConfig {
            fallback: fallback::cancelled_reservations(),
            empty_policy: EmptyPolicy::Accept,
            warning: "Unable to load live data. Showing fallback.",
            initial_filter: ReservationStatus::Cancelled.into(),
        },
    )
}

/// Recent reservations on the dashboard: this page treats an empty 2xx
/// response as a failed load.
pub fn recent_reservations(api: ReservationsApi) -> ListController<ReservationSource> {
    ListController::new(
        ReservationSource::new(api),
        ListConfig {
            fallback: fallback::dashboard_reservations(),
            empty_policy: EmptyPolicy::Substitute,
            warning: "Unable to load live reservations. Showing fallback data.",
            initial_filter: StatusFilter::All,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use crate::controller::list::LoadState;

    fn offline_api() -> ReservationsApi {
        let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
        ReservationsApi::new(config.build_http_client())
    }

    #[tokio::test]
    async fn pending_page_starts_narrowed_and_has_no_fallback_rows() {
        let mut page = pending_page(offline_api());
        assert_eq!(*page.filter(), StatusFilter::Token("pending".to_string()));

        page.load().await;
        assert_eq!(page.state(), LoadState::Errored);
        assert!(page.items().is_empty());
        assert_eq!(page.error(), Some("Unable to load reservations."));
    }

    #[tokio::test]
    async fn cancelled_page_falls_back_and_keeps_its_narrowing() {
        let mut page = cancelled_page(offline_api());
        page.load().await;
        assert_eq!(page.state(), LoadState::Errored);
        assert_eq!(page.items().len(), 2);
        // Only the cancelled fallback row survives the initial filter.
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(page.filtered()[0].status, ReservationStatus::Cancelled);
    }
}
