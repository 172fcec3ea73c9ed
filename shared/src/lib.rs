//! Shared types for the Prime Table partner portal
//!
//! Wire models, status enumerations and formatting helpers used by the
//! partner-client crate. These types mirror the backend's JSON surface.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use models::{
    CommunicationSettings, DashboardSummary, EarningStatus, EarningsBooking, EarningsCard,
    Reservation, ReservationStatus, RestaurantProfile,
};
