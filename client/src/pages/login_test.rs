use super::*;

#[test]
fn validate_login_input_trims_username_only() {
    assert_eq!(
        validate_login_input("  alice ", " secret "),
        Ok(LoginForm { username: "alice".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
}
