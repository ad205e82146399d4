#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The client's belief about whether the current user is authenticated,
/// and with what token.
///
/// Exactly one variant holds at any time. The app starts `Unauthenticated`
/// and only a successful login response carrying a token moves it to
/// `Authenticated`. It is never persisted: a page reload always starts over
/// at `Unauthenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated { token: String },
}

impl Session {
    /// Transition to `Authenticated` with the given token.
    ///
    /// Valid from any state; a re-login overwrites the previous token.
    pub fn login(&mut self, token: String) {
        *self = Session::Authenticated { token };
    }

    /// Transition to `Unauthenticated` from any state.
    ///
    /// Always succeeds locally. The server-side logout call is best-effort
    /// notification, not a precondition for this transition.
    pub fn logout(&mut self) {
        *self = Session::Unauthenticated;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// The bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token } => Some(token),
            Session::Unauthenticated => None,
        }
    }
}
