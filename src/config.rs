//! Client configuration.
//!
//! The API base URL is resolved at compile time from the `API_BASE_URL`
//! environment variable so deployments can point the bundle at a different
//! backend without code changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/users";

/// Base URL for the account API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Full URL for an API path such as `/login`.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base_url())
}
