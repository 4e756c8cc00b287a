use super::*;
use crate::payload::{LoginPayload, SignupPayload};

#[test]
fn login_record_masks_password() {
    let payload = LoginPayload { email: "student@email.com".to_owned(), password: "secret".to_owned() };
    let record = submission_record(&payload).unwrap();
    assert_eq!(record, serde_json::json!({ "email": "student@email.com", "password": "********" }));
}

#[test]
fn signup_record_masks_both_password_fields() {
    let payload = SignupPayload {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@email.com".to_owned(),
        password: "abc123".to_owned(),
        confirm_password: "abc123".to_owned(),
    };
    let record = submission_record(&payload).unwrap();
    assert_eq!(record["password"], "********");
    assert_eq!(record["confirmPassword"], "********");
    assert_eq!(record["firstName"], "Ada");
}

#[test]
fn nested_values_are_masked() {
    let record = submission_record(&serde_json::json!({ "users": [{ "Password": "x", "name": "n" }] })).unwrap();
    assert_eq!(record, serde_json::json!({ "users": [{ "Password": "********", "name": "n" }] }));
}

#[test]
fn submitted_logs_masked_record_at_info() {
    crate::util::log_capture::install();
    let payload = LoginPayload { email: "trace-info@email.com".to_owned(), password: "secret".to_owned() };

    submitted("Login", &payload);

    let lines = crate::util::log_capture::lines_mentioning("trace-info@email.com");
    assert_eq!(lines.len(), 1);
    let (level, message) = &lines[0];
    assert_eq!(*level, log::Level::Info);
    assert!(message.starts_with("Login submitted: "), "unexpected message: {message}");
    assert!(message.contains(r#""password":"********""#));
    assert!(!message.contains("secret"));
}
