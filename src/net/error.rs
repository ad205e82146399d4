#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ErrorBody;

/// Failure of one API operation.
///
/// Terminal for the triggering operation: the client never retries. Every
/// variant is surfaced to the user as an error toast by the caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response, with the server's message or a fixed fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// A 2xx response whose body failed schema validation.
    #[error("malformed response from server")]
    MalformedResponse,
}

/// Extract a human-readable message from an error response body.
///
/// Uses the body's `message` field when present, otherwise `fallback` — the
/// body may be empty, unparsable, or missing the field entirely.
pub fn status_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| fallback.to_owned())
}
