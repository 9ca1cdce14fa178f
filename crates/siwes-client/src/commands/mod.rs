//! Command handlers called by the UI layer.
//!
//! Each sub-module groups related commands by domain.  Every command takes
//! the calling client's [`AppState`](crate::AppState), checks the session
//! and the role rules, and locks the shared store for its own duration only.

pub mod dashboard;
pub mod identity;
pub mod logs;
pub mod notifications;
pub mod profile;
pub mod reports;
