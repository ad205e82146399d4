use super::*;

#[test]
fn endpoint_appends_path_to_base_url() {
    assert_eq!(endpoint("/login"), format!("{}/login", api_base_url()));
}

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
