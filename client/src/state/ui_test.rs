use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_quiet() {
    let state = UiState::default();
    assert!(state.toasts.is_empty());
    assert_eq!(state.session_expired_seq, 0);
    assert!(!state.menu_open);
}

// =============================================================
// Toast queue
// =============================================================

#[test]
fn toasts_get_increasing_ids() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "uno");
    let b = state.push_toast(ToastKind::Success, "dos");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].message, "dos");
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = UiState::default();
    let a = state.push_toast(ToastKind::Info, "uno");
    let b = state.push_toast(ToastKind::Error, "dos");
    state.dismiss_toast(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss_toast(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn queue_drops_oldest_beyond_limit() {
    let mut state = UiState::default();
    for n in 0..(MAX_TOASTS + 2) {
        state.push_toast(ToastKind::Info, format!("t{n}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "t2");
}

#[test]
fn session_expiry_bumps_sequence() {
    let mut state = UiState::default();
    state.mark_session_expired();
    state.mark_session_expired();
    assert_eq!(state.session_expired_seq, 2);
}

#[test]
fn toast_classes_follow_kind() {
    assert_eq!(ToastKind::Error.css_class(), "toast toast--error");
}
