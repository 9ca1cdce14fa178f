//! Field-level checks applied before anything reaches the store.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Reject content that is empty once surrounding whitespace is trimmed.
pub fn require_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// Reject a blank required text field, naming it in the error.
pub fn require_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// `start` may equal `end` (a one-day period) but never follow it.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::InvalidDateRange { start, end });
    }
    Ok(())
}

pub fn week_number(week: u32) -> Result<(), ValidationError> {
    if week == 0 {
        return Err(ValidationError::InvalidWeekNumber(week));
    }
    Ok(())
}
