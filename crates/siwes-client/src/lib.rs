//! # siwes-client
//!
//! Everything one connected user does with the workbook.
//!
//! An [`AppState`] pairs a handle to the shared [`Store`](siwes_store::Store)
//! with that user's own [`Session`].  The functions in [`commands`] are what
//! a UI layer calls: they check who is logged in, apply the role rules of
//! [`workflow`] and then read or write the store.

pub mod auth;
pub mod commands;
pub mod session;
pub mod state;
pub mod workflow;

mod error;

pub use auth::{Credentials, DemoRoleSelector, IdentityResolver};
pub use error::{ClientError, Result};
pub use session::Session;
pub use state::{share, AppState, SharedStore};
