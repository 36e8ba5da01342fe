//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, submit
//! handlers) and delegates rendering details and validation to `components`
//! and `state`. Pages that need a session wrap their body in `AuthGate` so
//! nothing is fetched before the gate allows it.

pub mod admin;
pub mod appointments;
pub mod favorites;
pub mod login;
pub mod lost_pets;
pub mod password;
pub mod pet_detail;
pub mod pets;
pub mod profile;
pub mod register;
pub mod requests;
pub mod shelter_panel;
