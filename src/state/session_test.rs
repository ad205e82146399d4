use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn session_starts_unauthenticated() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_sets_token() {
    let mut session = Session::default();
    session.login("abc".to_owned());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc"));
}

#[test]
fn relogin_overwrites_previous_token() {
    let mut session = Session::default();
    session.login("first".to_owned());
    session.login("second".to_owned());
    assert_eq!(session.token(), Some("second"));
}

#[test]
fn logout_clears_authenticated_session() {
    let mut session = Session::default();
    session.login("abc".to_owned());
    session.logout();
    assert_eq!(session, Session::Unauthenticated);
    assert_eq!(session.token(), None);
}

#[test]
fn logout_when_already_unauthenticated_is_a_no_op() {
    let mut session = Session::default();
    session.logout();
    assert_eq!(session, Session::Unauthenticated);
}

#[test]
fn any_login_logout_sequence_ends_unauthenticated() {
    let mut session = Session::default();
    for token in ["a", "b", "c"] {
        session.login(token.to_owned());
        session.logout();
    }
    assert!(!session.is_authenticated());
}
