//! Partner Client - HTTP client for the Prime Table partner backend
//!
//! Typed access to the partner REST surface plus the per-page view
//! models: remote lists with fallback data, the dashboard fan-out,
//! auth, the profile form and the settings screens.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod fallback;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{Session, SessionStorage};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use shared::models::{Reservation, ReservationStatus};
