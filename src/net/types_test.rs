use super::*;

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_reads_camel_case_access_token() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"accessToken":"X"}"#).expect("parses");
    assert_eq!(body.access_token, "X");
}

#[test]
fn login_response_without_token_is_rejected() {
    assert!(serde_json::from_str::<LoginResponse>("{}").is_err());
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_reads_username_and_email() {
    let profile: Profile =
        serde_json::from_str(r#"{"username":"sam","email":"sam@example.com"}"#)
            .expect("parses");
    assert_eq!(profile.username, "sam");
    assert_eq!(profile.email, "sam@example.com");
}

#[test]
fn profile_with_missing_fields_is_rejected() {
    assert!(serde_json::from_str::<Profile>(r#"{"username":"sam"}"#).is_err());
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_message_is_optional() {
    let body: ErrorBody = serde_json::from_str("{}").expect("parses");
    assert!(body.message.is_none());
}
