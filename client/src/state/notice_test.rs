use super::*;

#[test]
fn show_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.show(NoticeKind::Success, "Service created successfully");
    state.show(NoticeKind::Error, "Failed to delete service");
    let notice = state.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Failed to delete service");
}

#[test]
fn matching_timer_dismisses() {
    let mut state = NoticeState::default();
    let seq = state.show(NoticeKind::Success, "Saved");
    assert!(state.dismiss(seq));
    assert!(state.current().is_none());
}

#[test]
fn older_timer_never_clears_newer_notice() {
    let mut state = NoticeState::default();
    let first = state.show(NoticeKind::Success, "Saved");
    let second = state.show(NoticeKind::Success, "Saved again");
    assert!(!state.dismiss(first));
    assert_eq!(state.current().map(|n| n.text.as_str()), Some("Saved again"));
    assert!(state.dismiss(second));
}

#[test]
fn notice_lifetimes() {
    assert_eq!(NOTICE_TTL.as_secs(), 3);
    assert_eq!(BOOKING_NOTICE_TTL.as_secs(), 5);
}
