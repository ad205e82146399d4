//! Reusable UI components.

pub mod toast;
