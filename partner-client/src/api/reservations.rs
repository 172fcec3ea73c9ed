//! Reservations API

use crate::{ClientResult, HttpClient};
use serde::Serialize;
use shared::models::{Reservation, ReservationStatus};

/// `/reservations` endpoints.
#[derive(Debug, Clone)]
pub struct ReservationsApi {
    http: HttpClient,
}

impl ReservationsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all reservations for the partner.
    pub async fn list(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get("reservations").await
    }

    /// Update one reservation's status. The caller refetches afterwards;
    /// there is no optimistic local patch.
    pub async fn update_status(&self, id: &str, status: ReservationStatus) -> ClientResult<()> {
        #[derive(Serialize)]
        struct StatusUpdate {
            status: ReservationStatus,
        }

        self.http
            .put_unit(&format!("reservations/{id}"), &StatusUpdate { status })
            .await
    }

    /// Remove a reservation.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("reservations/{id}")).await
    }
}
