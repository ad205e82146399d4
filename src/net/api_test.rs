use super::*;

// =============================================================
// Auth header
// =============================================================

#[test]
fn bearer_formats_the_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

// =============================================================
// Fallback text
// =============================================================

#[test]
fn fallback_messages_match_the_user_facing_text() {
    assert_eq!(REGISTER_FALLBACK, "Registration failed. Please try again.");
    assert_eq!(LOGIN_FALLBACK, "Login failed. Please try again.");
    assert_eq!(LOGOUT_FALLBACK, "Failed to log out. Please try again.");
}
