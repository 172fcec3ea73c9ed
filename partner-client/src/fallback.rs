//! Hardcoded fallback datasets
//!
//! Shown when a live fetch fails (or, on some pages, returns nothing).
//! The rows mirror what the backend would serve for a demo account.

use rust_decimal::Decimal;
use shared::models::{
    DashboardSummary, EarningStatus, EarningsBooking, EarningsCard, Reservation,
    ReservationStatus,
};

fn reservation(
    id: &str,
    date: &str,
    time: &str,
    size: u32,
    table: &str,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        size,
        name: "Mecury Paul".to_string(),
        table: table.to_string(),
        status,
    }
}

/// Reservations page fallback.
pub fn reservations() -> Vec<Reservation> {
    vec![
        reservation("1", "2025-08-22", "7:00 PM", 4, "T1", ReservationStatus::Pending),
        reservation("2", "2025-08-22", "7:00 PM", 4, "T1", ReservationStatus::Approved),
        reservation("3", "2025-08-22", "7:00 PM", 4, "T1", ReservationStatus::Cancelled),
    ]
}

/// Recent-reservations fallback on the dashboard.
pub fn dashboard_reservations() -> Vec<Reservation> {
    vec![
        reservation("1", "2025-08-22", "7:00 PM", 4, "T4", ReservationStatus::Pending),
        reservation("2", "2025-08-23", "8:00 PM", 2, "T4", ReservationStatus::Approved),
        reservation("3", "2025-08-23", "8:00 PM", 2, "T4", ReservationStatus::Cancelled),
    ]
}

/// Cancelled-reservations page fallback.
pub fn cancelled_reservations() -> Vec<Reservation> {
    vec![
        reservation("1", "2025-08-22", "7:00 PM", 4, "T4", ReservationStatus::Cancelled),
        reservation("2", "2025-08-23", "8:00 PM", 2, "T4", ReservationStatus::Pending),
    ]
}

/// Dashboard summary fallback, derived from the fallback reservations.
pub fn dashboard_summary() -> DashboardSummary {
    let rows = dashboard_reservations();
    DashboardSummary {
        total_bookings: rows.len() as u64,
        incoming_reservations: rows
            .iter()
            .filter(|r| r.status == ReservationStatus::Pending)
            .count() as u64,
        payout_amount: Decimal::from(150_000),
        payout_status: "pending".to_string(),
        views_this_week: 543,
    }
}

fn booking(id: i64, booking_id: &str, date: &str, status: EarningStatus) -> EarningsBooking {
    EarningsBooking {
        id,
        booking_id: booking_id.to_string(),
        date: date.to_string(),
        amount: "15,000.00".to_string(),
        status,
        withdrawal_earnings: String::new(),
    }
}

/// Earnings table fallback.
pub fn earnings_bookings() -> Vec<EarningsBooking> {
    vec![
        booking(1, "#SK-1015", "2025-07-24", EarningStatus::Paid),
        booking(2, "#SK-1016", "2025-07-24", EarningStatus::InEscrow),
        booking(3, "#SK-1017", "2025-08-01", EarningStatus::Pending),
    ]
}

/// Earnings summary cards fallback.
pub fn earnings_cards() -> Vec<EarningsCard> {
    vec![
        EarningsCard {
            id: 1,
            title: "Total Earning".to_string(),
            amount: "₦250,000".to_string(),
        },
        EarningsCard {
            id: 2,
            title: "In Escrow".to_string(),
            amount: "₦150,000".to_string(),
        },
        EarningsCard {
            id: 3,
            title: "Paid Out".to_string(),
            amount: "₦300,000".to_string(),
        },
    ]
}
