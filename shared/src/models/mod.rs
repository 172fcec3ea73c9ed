//! Data models
//!
//! Shared between the partner portal backend (via API) and the client.
//! Status fields are closed sets compared case-insensitively; reservation
//! identifiers arrive either as a `_id` string or a numeric `id`.

pub mod dashboard;
pub mod earnings;
pub mod profile;
pub mod reservation;
pub mod settings;

// Re-exports
pub use dashboard::*;
pub use earnings::*;
pub use profile::*;
pub use reservation::*;
pub use settings::*;
