use super::*;

#[test]
fn reset_file_input_survives_disposed_page() {
    let owner = Owner::new();
    let file_input = owner.with(NodeRef::<leptos::html::Input>::new);
    owner.cleanup();
    assert!(!reset_file_input(file_input));
}

#[test]
fn reset_file_input_without_mounted_element_is_noop() {
    Owner::new().with(|| {
        let file_input = NodeRef::<leptos::html::Input>::new();
        assert!(!reset_file_input(file_input));
    });
}
