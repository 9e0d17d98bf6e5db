use super::*;

#[test]
fn toast_state_starts_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Series created");
    let b = state.push(ToastKind::Error, "Request failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "Series created");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "first");
    let _b = state.push(ToastKind::Info, "second");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "second");
}

#[test]
fn dismiss_ignores_unknown_id() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "kept");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn toast_kinds_map_to_distinct_classes() {
    assert_ne!(ToastKind::Success.css_class(), ToastKind::Error.css_class());
    assert_ne!(ToastKind::Error.css_class(), ToastKind::Info.css_class());
}
