#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use super::session::Session;

/// Where the router should land for a requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Register,
    Login,
    Profile,
    RedirectLogin,
    RedirectRegister,
    NotFound,
}

/// Decide the destination for `path` given the current session.
///
/// `/profile` is the only guarded route: it renders for an authenticated
/// session and redirects to `/login` otherwise. `/` lands on registration.
/// Unrecognized paths go to the not-found page.
///
/// Pure and stateless: the same `(session, path)` pair always yields the
/// same destination. Evaluated on every render of the routed view.
pub fn guard(session: &Session, path: &str) -> Destination {
    match path {
        "/" => Destination::RedirectRegister,
        "/register" => Destination::Register,
        "/login" => Destination::Login,
        "/profile" if session.is_authenticated() => Destination::Profile,
        "/profile" => Destination::RedirectLogin,
        _ => Destination::NotFound,
    }
}
