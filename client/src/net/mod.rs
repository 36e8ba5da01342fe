//! Networking glue between the UI and `api-client`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` supplies the browser transport (or the SSR stand-in) and builds the
//! one `SessionController` the app shares through context.

pub mod api;
