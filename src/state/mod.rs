//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `forms`, `toast`) and expressed as
//! plain values with reducer-style methods, so transition rules are unit
//! testable without a browser. Components hold these values in `RwSignal`s
//! provided via context.

pub mod forms;
pub mod route;
pub mod session;
pub mod toast;
