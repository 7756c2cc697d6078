use super::*;

#[test]
fn validate_signup_input_trims_username_and_email() {
    assert_eq!(
        validate_signup_input(" alice ", " alice@example.com ", "pw"),
        Ok(SignupRequest {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

#[test]
fn validate_signup_input_requires_every_field() {
    assert_eq!(validate_signup_input("", "a@b.com", "pw"), Err("Fill in username, email and password."));
    assert_eq!(validate_signup_input("a", "  ", "pw"), Err("Fill in username, email and password."));
    assert_eq!(validate_signup_input("a", "a@b.com", ""), Err("Fill in username, email and password."));
}

#[test]
fn validate_signup_input_rejects_malformed_email() {
    assert_eq!(validate_signup_input("a", "not-an-email", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_signup_input("a", "@example.com", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_signup_input("a", "a@localhost", "pw"), Err("Enter a valid email address."));
}
