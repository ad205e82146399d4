//! Routed pages: registration, login, profile, and not-found.

pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
