//! Input validation errors shared by all request types.

use thiserror::Error;
use validator::ValidationErrors;

/// Error produced while turning a request body into a validated input type.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{}", describe_validation_errors(.0))]
    Invalid(ValidationErrors),

    #[error("{0}")]
    InvalidValue(String),
}

impl From<ValidationErrors> for InputError {
    fn from(errors: ValidationErrors) -> Self {
        InputError::Invalid(errors)
    }
}

/// Request types whose required fields arrive as `Option`s.
///
/// Fields are listed in declaration order so error messages are stable.
pub trait RequiredFields {
    /// Names (as sent on the wire) of required fields that are absent or blank.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Fails with [`InputError::MissingFields`] when any required field is absent.
    fn check_required(&self) -> Result<(), InputError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::MissingFields(missing))
        }
    }
}

/// Returns true when a string field is absent, empty, or whitespace-only.
pub fn is_missing_str(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map_or(true, shared::validation::is_blank)
}

/// Flattens validator errors into one sorted, human-readable line.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join("; ")
}
