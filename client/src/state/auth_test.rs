use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// Mirroring the session
// =============================================================

#[test]
fn checking_is_loading() {
    let state = AuthState::from(&SessionState::Checking);
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn anonymous_is_resolved_without_user() {
    let state = AuthState::from(&SessionState::Anonymous);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.role(), None);
}

#[test]
fn authenticated_carries_user_and_role() {
    let user = User { email: "r@b.com".to_owned(), user_type: UserType::Refugio, ..User::default() };
    let state = AuthState::from(&SessionState::Authenticated(user));
    assert!(!state.loading);
    assert!(state.has_role(UserType::Refugio));
    assert!(!state.has_role(UserType::Admin));
}
