//! REST operations against the account API.
//!
//! All requests send cookies (`credentials: include`). A non-2xx response
//! becomes [`ApiError::Status`] carrying the server's `message` field when
//! present or the fixed per-operation fallback; a 2xx body that fails schema
//! validation becomes [`ApiError::MalformedResponse`].

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use super::error::{ApiError, status_message};
use super::types::{LoginResponse, Profile};
use crate::config;
use crate::state::forms::{LoginForm, RegisterForm};

/// Fallback shown when a failed registration carries no message.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
/// Fallback shown when a failed login carries no message.
pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
/// Fallback shown when a failed profile fetch carries no message.
pub const PROFILE_FALLBACK: &str = "Failed to load profile";
/// Fallback shown when a failed logout carries no message.
pub const LOGOUT_FALLBACK: &str = "Failed to log out. Please try again.";

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Register a new account via `POST /register`.
///
/// # Errors
///
/// [`ApiError::Status`] on a non-2xx response, [`ApiError::Transport`] when
/// the request never completes.
pub async fn register(form: &RegisterForm) -> Result<(), ApiError> {
    let resp = Request::post(&config::endpoint("/register"))
        .credentials(RequestCredentials::Include)
        .json(form)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !resp.ok() {
        return Err(status_error(&resp, REGISTER_FALLBACK).await);
    }
    Ok(())
}

/// Log in via `POST /login`, returning the access token on success.
///
/// # Errors
///
/// [`ApiError::Status`], [`ApiError::Transport`], or
/// [`ApiError::MalformedResponse`] when the 2xx body has no `accessToken`.
pub async fn login(form: &LoginForm) -> Result<String, ApiError> {
    let resp = Request::post(&config::endpoint("/login"))
        .credentials(RequestCredentials::Include)
        .json(form)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !resp.ok() {
        return Err(status_error(&resp, LOGIN_FALLBACK).await);
    }
    let body: LoginResponse = resp
        .json()
        .await
        .map_err(|_| ApiError::MalformedResponse)?;
    Ok(body.access_token)
}

/// Fetch the authenticated user's profile via `GET /profile`.
///
/// # Errors
///
/// [`ApiError::Status`] on a non-2xx response (an expired or rejected token
/// lands here), [`ApiError::Transport`], or [`ApiError::MalformedResponse`].
pub async fn fetch_profile(token: &str) -> Result<Profile, ApiError> {
    let resp = Request::get(&config::endpoint("/profile"))
        .credentials(RequestCredentials::Include)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !resp.ok() {
        return Err(status_error(&resp, PROFILE_FALLBACK).await);
    }
    resp.json().await.map_err(|_| ApiError::MalformedResponse)
}

/// Notify the server of a logout via `POST /logout`. Best-effort: the
/// caller's local state transition does not depend on the outcome.
///
/// # Errors
///
/// [`ApiError::Status`] or [`ApiError::Transport`]; callers only surface
/// the message.
pub async fn logout() -> Result<(), ApiError> {
    let resp = Request::post(&config::endpoint("/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !resp.ok() {
        return Err(status_error(&resp, LOGOUT_FALLBACK).await);
    }
    Ok(())
}

async fn status_error(resp: &Response, fallback: &str) -> ApiError {
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status {
        status: resp.status(),
        message: status_message(&body, fallback),
    }
}
