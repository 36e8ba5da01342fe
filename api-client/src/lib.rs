//! # api-client
//!
//! REST client and session core for the Huellitas pet adoption front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos `client` crate and the `cli` binary both talk to the external
//! backend through this crate. HTTP goes through the [`transport::Transport`]
//! seam (reqwest natively, `gloo-net` in the browser), persistence through the
//! [`storage::KeyValueStore`] seam (memory, `localStorage`, or a JSON file).
//!
//! [`session::SessionController`] owns the authentication state machine and is
//! the single observable source of the signed-in user.

pub mod client;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod resources;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use session::{SessionController, SessionState};
#[cfg(feature = "native")]
pub use transport::ReqwestTransport;
pub use types::{User, UserType};
