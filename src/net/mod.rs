//! HTTP client for the account API.

pub mod api;
pub mod error;
pub mod types;
