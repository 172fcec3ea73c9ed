//! Dashboard summary model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only aggregate snapshot for the partner dashboard, refreshed on
/// page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_bookings: u64,
    pub incoming_reservations: u64,
    pub payout_amount: Decimal,
    pub payout_status: String,
    pub views_this_week: u64,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self {
            total_bookings: 0,
            incoming_reservations: 0,
            payout_amount: Decimal::ZERO,
            payout_status: "pending".to_string(),
            views_this_week: 0,
        }
    }
}
