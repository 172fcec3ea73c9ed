//! Earnings view model
//!
//! Loads the bookings table and the summary cards concurrently, each
//! falling back to the static demo dataset. Filtering combines a status
//! token with an optional exact-date match.

use crate::api::DashboardApi;
use crate::controller::list::{LoadState, StatusFilter};
use crate::fallback;
use shared::models::{EarningsBooking, EarningsCard};

pub struct EarningsController {
    api: DashboardApi,
    bookings: Vec<EarningsBooking>,
    cards: Vec<EarningsCard>,
    status_filter: StatusFilter,
    date_filter: Option<String>,
    state: LoadState,
    error: Option<String>,
}

impl EarningsController {
    pub fn new(api: DashboardApi) -> Self {
        Self {
            api,
            bookings: Vec::new(),
            cards: Vec::new(),
            status_filter: StatusFilter::All,
            date_filter: None,
            state: LoadState::Idle,
            error: None,
        }
    }

    /// Fetch rows and cards concurrently; either side falls back to the
    /// static dataset on failure or emptiness.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        let (bookings, cards) = tokio::join!(self.api.bookings(), self.api.cards());

        let mut fell_back = false;

        self.bookings = match bookings {
            Ok(rows) if !rows.is_empty() => rows,
            Ok(_) => {
                fell_back = true;
                fallback::earnings_bookings()
            }
            Err(err) => {
                tracing::error!(error = %err, "earnings bookings fetch failed");
                fell_back = true;
                fallback::earnings_bookings()
            }
        };

        self.cards = match cards {
            Ok(cards) if !cards.is_empty() => cards,
            Ok(_) => {
                fell_back = true;
                fallback::earnings_cards()
            }
            Err(err) => {
                tracing::error!(error = %err, "earnings cards fetch failed");
                fell_back = true;
                fallback::earnings_cards()
            }
        };

        if fell_back {
            self.error = Some("Unable to load live earnings. Showing fallback data.".to_string());
            self.state = LoadState::Errored;
        } else {
            self.error = None;
            self.state = LoadState::Loaded;
        }
    }

    /// Rows narrowed by status token and, when picked, an exact date.
    pub fn filtered(&self) -> Vec<&EarningsBooking> {
        self.bookings
            .iter()
            .filter(|b| self.status_filter.matches(*b))
            .filter(|b| match &self.date_filter {
                Some(date) => &b.date == date,
                None => true,
            })
            .collect()
    }

    /// Distinct booking dates, in first-seen order, for the date select.
    pub fn dates(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for booking in &self.bookings {
            if !seen.contains(&booking.date.as_str()) {
                seen.push(booking.date.as_str());
            }
        }
        seen
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// `None` clears the date narrowing.
    pub fn set_date_filter(&mut self, date: Option<String>) {
        self.date_filter = date.filter(|d| !d.is_empty());
    }

    pub fn bookings(&self) -> &[EarningsBooking] {
        &self.bookings
    }

    pub fn cards(&self) -> &[EarningsCard] {
        &self.cards
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
