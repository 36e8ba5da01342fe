//! Error taxonomy for backend calls.
//!
//! DESIGN
//! ======
//! Authorization failures get their own variant so callers branch on the type
//! instead of inspecting message text. Validation messages from the backend are
//! carried verbatim for inline display.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::time::Duration;

/// Localized text shown when the backend rejects the session.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesión expirada. Por favor, inicia sesión nuevamente.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401. Persisted auth state has already been cleared.
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    Unauthorized,
    /// Any other non-2xx status, with the backend message when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("la solicitud excedió el tiempo límite ({}s)", .0.as_secs())]
    Timeout(Duration),
    #[error("error de red: {0}")]
    Network(String),
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("solicitud inválida: {0}")]
    Encode(String),
    #[error("no disponible en el servidor")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// HTTP status if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the error for a non-2xx, non-401 response body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = backend_message(body).unwrap_or_else(|| generic_status_message(status));
        Self::Status { status, message }
    }
}

/// Fallback text when the backend sends no usable message.
#[must_use]
pub fn generic_status_message(status: u16) -> String {
    format!("Error HTTP {status}")
}

/// Extract `message` (or `error`) from a JSON error body.
fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error", "mensaje"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_owned)
}
