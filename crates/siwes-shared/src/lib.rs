//! # siwes-shared
//!
//! Types shared by every crate of the SIWES workbook: entity identifiers,
//! user roles, the weekly report lifecycle, validation rules and constants.

pub mod constants;
pub mod error;
pub mod types;
pub mod validate;

pub use error::{ParseEnumError, ValidationError};
pub use types::{
    generate_id, LogEntryId, NotificationId, ProfileId, ReportId, ReportStatus, Role, UserId,
};
