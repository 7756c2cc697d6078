use super::*;

#[test]
fn notice_state_defaults_empty() {
    assert!(NoticeState::default().items.is_empty());
}

#[test]
fn push_keeps_order_and_assigns_unique_ids() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeLevel::Success, "Document uploaded successfully!");
    let second = state.push(NoticeLevel::Error, "Please select a file first.");
    assert_ne!(first, second);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].text, "Document uploaded successfully!");
    assert_eq!(state.items[1].level, NoticeLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeLevel::Error, "a");
    let _second = state.push(NoticeLevel::Error, "b");
    state.dismiss(&first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].text, "b");
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}
