//! # account-portal
//!
//! Leptos + WASM browser client for the account API: registration, login,
//! authenticated profile viewing, and logout.
//!
//! The one stateful subsystem is the session state machine in
//! [`state::session`]: the client's belief about whether the user is
//! authenticated and with what token. It is acquired by a successful login,
//! dropped by logout or by a failed profile fetch, and consulted by the
//! route guard in [`state::route`] on every render. It lives only for the
//! current page lifetime; a reload starts over unauthenticated.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
