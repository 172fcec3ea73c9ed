//! Per-page view models
//!
//! Every page shares the same lifecycle: `Idle → Loading → {Loaded,
//! Errored}`, re-entering `Loading` on any refetch-triggering action.
//! Errors never escape a controller; they resolve to a substituted
//! fallback dataset with a warning, or a message with unchanged state.

pub mod auth;
pub mod dashboard;
pub mod earnings;
pub mod list;
pub mod profile;
pub mod reservations;
pub mod settings;

pub use auth::AuthController;
pub use dashboard::DashboardController;
pub use earnings::EarningsController;
pub use list::{
    EmptyPolicy, ListConfig, ListController, ListSource, LoadState, MutableListSource,
    StatusFilter, StatusFiltered,
};
pub use profile::ProfileController;
pub use reservations::{
    cancelled_page, pending_page, recent_reservations, reservations_page, ReservationSource,
};
pub use settings::{CommunicationController, SecurityController, SecurityForm};
