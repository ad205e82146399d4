//! Response schemas for the account API.
//!
//! Every 2xx body is validated against these structs at the client boundary
//! instead of being consumed as loose JSON; a body that does not match is a
//! malformed response, never an unchecked field access. The wire format uses
//! camelCase field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Body of a successful `POST /login`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of a successful `GET /profile`. Read-only, server-sourced.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
    pub email: String,
}

/// Error body shape used by the API when a request fails.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
