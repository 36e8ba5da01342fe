//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of the `SessionController` value. `app::App` copies every
//! session transition into an `RwSignal<AuthState>` that the route gate and
//! user-aware components read; nothing writes it except that bridge.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api_client::{SessionState, User, UserType};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Unresolved until the browser restores the session.
    fn default() -> Self {
        Self::from(&SessionState::default())
    }
}

impl From<&SessionState> for AuthState {
    fn from(state: &SessionState) -> Self {
        Self { user: state.user().cloned(), loading: state.is_loading() }
    }
}

impl AuthState {
    pub fn role(&self) -> Option<UserType> {
        self.user.as_ref().map(|u| u.user_type)
    }

    pub fn has_role(&self, role: UserType) -> bool {
        self.role() == Some(role)
    }
}
