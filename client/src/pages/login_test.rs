use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  testuser  ", "secret123"),
        Ok(("testuser".to_owned(), "secret123".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("testuser", " pass word "),
        Ok(("testuser".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(validate_login_input("   ", "secret123"), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("testuser", ""), Err("Enter both username and password."));
}
