//! Typed wrappers over the partner REST surface

pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod reservations;
pub mod settings;

pub use auth::AuthApi;
pub use dashboard::DashboardApi;
pub use profile::ProfileApi;
pub use reservations::ReservationsApi;
pub use settings::SettingsApi;
