//! Endpoint methods on [`ApiClient`](crate::ApiClient), grouped by backend
//! resource.
//!
//! Paths are fixed templates relative to the configured base URL:
//! `/auth/*`, `/mascotas/*`, `/solicitudes/*`, `/citas/*`, `/favoritos/*`,
//! `/mascotas-perdidas/*`, `/admin/*`.

pub mod admin;
pub mod adoptions;
pub mod appointments;
pub mod auth;
pub mod favorites;
pub mod lost_pets;
pub mod pets;
