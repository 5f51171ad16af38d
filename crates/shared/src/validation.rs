//! Common validation utilities.

use chrono::NaiveDate;
use validator::ValidationError;

/// Calendar date format used for workout days.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a string is a real `YYYY-MM-DD` calendar date.
pub fn validate_iso_date(value: &str) -> Result<(), ValidationError> {
    if value.len() == 10 && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        Ok(())
    } else {
        let mut err = ValidationError::new("date_format");
        err.message = Some("date must be a calendar date in YYYY-MM-DD format".into());
        Err(err)
    }
}

/// Validates that a completion rate is a percentage (0 to 100).
pub fn validate_completion_rate(rate: i64) -> Result<(), ValidationError> {
    if (0..=100).contains(&rate) {
        Ok(())
    } else {
        let mut err = ValidationError::new("completion_rate_range");
        err.message = Some("completionRate must be between 0 and 100".into());
        Err(err)
    }
}

/// Returns true when a string is empty or contains only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
