//! # siwes-store
//!
//! In-memory record keeping for the SIWES workbook.
//!
//! A [`Store`] owns every user, student profile, daily log, weekly report
//! and notification of the process.  Reads hand out references in insertion
//! order, writes validate their input first and leave the store untouched
//! when they fail.  There is no persistence: the data lives as long as the
//! `Store` value does.

pub mod logs;
pub mod models;
pub mod notifications;
pub mod profiles;
pub mod reports;
pub mod seed;
pub mod store;
pub mod users;

mod error;
mod table;

pub use error::{Result, StoreError};
pub use models::*;
pub use store::Store;
