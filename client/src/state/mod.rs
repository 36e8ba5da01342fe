//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, per-page form models) so
//! components depend on small focused models. Form models are plain structs
//! with pure validation; pages wrap them in signals.

pub mod adoption_form;
pub mod appointments;
pub mod auth;
pub mod lost_pets;
pub mod pets;
pub mod profile;
pub mod registration;
pub mod ui;
