//! Dashboard and earnings API

use crate::{ClientResult, HttpClient};
use shared::models::{DashboardSummary, EarningsBooking, EarningsCard};

/// `/dashboard-summary` and `/dashboard/*` endpoints.
#[derive(Debug, Clone)]
pub struct DashboardApi {
    http: HttpClient,
}

impl DashboardApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Aggregate counts for one partner.
    pub async fn summary(&self, partner_id: &str) -> ClientResult<DashboardSummary> {
        self.http
            .get(&format!("dashboard-summary?partnerId={partner_id}"))
            .await
    }

    /// Earnings table rows.
    pub async fn bookings(&self) -> ClientResult<Vec<EarningsBooking>> {
        self.http.get("dashboard/bookings").await
    }

    /// Earnings summary cards.
    pub async fn cards(&self) -> ClientResult<Vec<EarningsCard>> {
        self.http.get("dashboard/cards").await
    }
}
