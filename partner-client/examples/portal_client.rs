// partner-client/examples/portal_client.rs
// Drives the reservations and dashboard controllers against a running backend.

use partner_client::api::{DashboardApi, ReservationsApi};
use partner_client::controller::{reservations_page, DashboardController, StatusFilter};
use partner_client::{ClientConfig, SessionStorage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "connecting");

    let mut page = reservations_page(ReservationsApi::new(config.build_http_client()));
    page.load().await;
    tracing::info!(state = ?page.state(), rows = page.items().len(), "reservations loaded");
    if let Some(warning) = page.error() {
        tracing::warn!(warning, "showing fallback data");
    }

    page.set_filter(StatusFilter::parse("pending"));
    for row in page.filtered() {
        println!("{} {} {} x{} ({})", row.date, row.time, row.name, row.size, row.status);
    }

    let storage = SessionStorage::new(".", "session.json");
    let session = storage.load().unwrap_or_default();

    let mut dashboard = DashboardController::new(
        DashboardApi::new(config.build_http_client()),
        ReservationsApi::new(config.build_http_client()),
    );
    dashboard.load(&session).await;
    if let Some(warning) = dashboard.summary_error() {
        tracing::warn!(warning, "showing default summary");
    }
    println!(
        "bookings: {}  incoming: {}  views this week: {}",
        dashboard.summary().total_bookings,
        dashboard.summary().incoming_reservations,
        dashboard.summary().views_this_week
    );

    Ok(())
}
