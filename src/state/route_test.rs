use super::*;

fn authenticated() -> Session {
    let mut session = Session::default();
    session.login("abc".to_owned());
    session
}

// =============================================================
// Guarded route
// =============================================================

#[test]
fn profile_renders_when_authenticated() {
    assert_eq!(guard(&authenticated(), "/profile"), Destination::Profile);
}

#[test]
fn profile_redirects_to_login_when_unauthenticated() {
    assert_eq!(
        guard(&Session::Unauthenticated, "/profile"),
        Destination::RedirectLogin
    );
}

#[test]
fn profile_redirects_after_login_then_logout() {
    let mut session = authenticated();
    session.logout();
    assert_eq!(guard(&session, "/profile"), Destination::RedirectLogin);
}

// =============================================================
// Open routes
// =============================================================

#[test]
fn root_redirects_to_register() {
    assert_eq!(
        guard(&Session::Unauthenticated, "/"),
        Destination::RedirectRegister
    );
}

#[test]
fn register_and_login_render_regardless_of_session() {
    for session in [Session::Unauthenticated, authenticated()] {
        assert_eq!(guard(&session, "/register"), Destination::Register);
        assert_eq!(guard(&session, "/login"), Destination::Login);
    }
}

#[test]
fn unrecognized_paths_go_to_not_found() {
    for path in ["/nope", "/profile/extra", ""] {
        assert_eq!(guard(&Session::Unauthenticated, path), Destination::NotFound);
    }
}

// =============================================================
// Idempotence
// =============================================================

#[test]
fn guard_is_idempotent_for_a_fixed_input() {
    let session = authenticated();
    for path in ["/", "/register", "/login", "/profile", "/nope"] {
        assert_eq!(guard(&session, path), guard(&session, path));
    }
}
