//! Route gate decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page goes through `components::auth_gate::AuthGate`, which
//! renders whatever [`gate_decision`] returns. Keeping the decision pure lets
//! the redirect and role rules be tested without a reactive runtime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use api_client::UserType;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";

/// What a gated route should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still resolving; show a placeholder.
    Loading,
    /// Resolved with nobody signed in.
    RedirectToLogin,
    /// Signed in with the wrong role.
    Denied { role: UserType },
    Allow,
}

/// Decide what a route requiring `required` (any signed-in user when `None`)
/// renders for `auth`.
pub fn gate_decision(auth: &AuthState, required: Option<UserType>) -> GateDecision {
    if auth.loading {
        return GateDecision::Loading;
    }
    let Some(user) = auth.user.as_ref() else {
        return GateDecision::RedirectToLogin;
    };
    match required {
        Some(role) if user.user_type != role => GateDecision::Denied { role: user.user_type },
        _ => GateDecision::Allow,
    }
}

/// Landing route for a role, used after sign-in and by the access-denied panel.
pub fn home_route_for(role: UserType) -> &'static str {
    match role {
        UserType::Refugio => "/panel",
        UserType::Admin => "/admin",
        UserType::Veterinaria | UserType::Medico => "/citas",
        UserType::Usuario | UserType::Unknown => "/",
    }
}

/// Accept a post-login `redirect` target only when it is a local path.
pub fn safe_redirect(target: Option<&str>) -> Option<&str> {
    target
        .map(str::trim)
        .filter(|t| t.starts_with('/') && !t.starts_with("//") && !t.starts_with(LOGIN_ROUTE))
}

/// Login route that returns to `from` after signing in.
pub fn login_url(from: &str) -> String {
    match safe_redirect(Some(from)) {
        Some(target) if target != "/" => {
            let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
            format!("{LOGIN_ROUTE}?redirect={encoded}")
        }
        _ => LOGIN_ROUTE.to_owned(),
    }
}
