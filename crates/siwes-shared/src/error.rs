use chrono::NaiveDate;
use thiserror::Error;

/// Caller-supplied data violates an entity invariant.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("content required")]
    EmptyContent,

    #[error("feedback required")]
    EmptyFeedback,

    #[error("{0} required")]
    MissingField(&'static str),

    #[error("invalid date range: {start} is after {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid week number: {0} (must be at least 1)")]
    InvalidWeekNumber(u32),
}

/// A string did not name a known variant of a closed set (role, status).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
