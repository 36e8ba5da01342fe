//! Local UI chrome state (toasts, navigation menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session and page models.
//! Toasts are a bounded queue; the oldest is dropped when a new one would
//! exceed [`MAX_TOASTS`]. Auto-dismiss timing lives in `components::toast_stack`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const MAX_TOASTS: usize = 4;
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
    /// Bumped by the API client's 401 hook; the app redirects on change.
    pub session_expired_seq: u64,
    pub menu_open: bool,
}

impl UiState {
    /// Queue a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn mark_session_expired(&mut self) {
        self.session_expired_seq += 1;
    }
}
