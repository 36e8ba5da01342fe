//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold storage access, formatting, and auth-redirect helpers
//! used by more than one page.

pub mod auth;
pub mod format;
pub mod storage;
