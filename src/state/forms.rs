#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

/// Controlled state for the registration form.
///
/// The struct fields are the form schema: every input renders from and
/// writes back to its field, and serializing the struct yields exactly the
/// declared keys no matter the edit sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Controlled state for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}
