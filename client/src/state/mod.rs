//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `sign_in`, `ui`) so pages can depend on
//! small focused models that are testable without a browser.

pub mod auth;
pub mod sign_in;
pub mod ui;
