use thiserror::Error;

use siwes_shared::{ReportId, ReportStatus, Role, UserId, ValidationError};

/// Errors produced by the store layer.
///
/// Absence is not an error here: lookups return `Option`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Caller-supplied data breaks an entity invariant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An explicit id is already taken in its collection.
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// Another user already signs in with this email.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// A student can only have one placement profile.
    #[error("User {0} already has a student profile")]
    DuplicateProfile(UserId),

    /// A reference points at a user that does not exist.
    #[error("Unknown user: {0}")]
    UnknownUser(UserId),

    /// A reference points at a user with the wrong role.
    #[error("User {user} is a {actual}, expected a {expected}")]
    RoleMismatch {
        user: UserId,
        expected: Role,
        actual: Role,
    },

    /// The requested status change skips or reverses a lifecycle step.
    #[error("Invalid report transition: {from} -> {to}")]
    InvalidTransition { from: ReportStatus, to: ReportStatus },

    /// New reports start out as drafts or submitted, never reviewed.
    #[error("A report cannot be created as {0}")]
    InvalidInitialStatus(ReportStatus),

    /// Only drafts can be edited without a status change.
    #[error("Report {id} is {status} and can no longer be edited")]
    Locked { id: ReportId, status: ReportStatus },

    /// Feedback belongs to the submitted -> reviewed step only.
    #[error("Feedback can only be given when a report is reviewed")]
    FeedbackOutsideReview,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
