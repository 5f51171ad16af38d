//! Exercise descriptor domain model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::ValidationError;

/// One entry of an ordered exercise list.
///
/// Only `name` is interpreted by the server. Everything else the client sends
/// (sets, reps, weight, rest, notes, ...) is kept verbatim in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Exercise {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: Map::new(),
        }
    }

    /// Adds a descriptor field, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Validates an exercise list: non-empty, and every entry is named.
pub fn validate_exercises(exercises: &[Exercise]) -> Result<(), ValidationError> {
    if exercises.is_empty() {
        let mut err = ValidationError::new("exercises_empty");
        err.message = Some("exercises must contain at least one exercise".into());
        return Err(err);
    }

    if let Some(index) = exercises
        .iter()
        .position(|e| shared::validation::is_blank(&e.name))
    {
        let mut err = ValidationError::new("exercise_name");
        err.message = Some(format!("exercises[{}] must have a name", index).into());
        return Err(err);
    }

    Ok(())
}

/// Serializes an exercise list for storage in a text column.
pub fn encode_exercises(exercises: &[Exercise]) -> Result<String, serde_json::Error> {
    serde_json::to_string(exercises)
}

/// Parses a stored exercise list back into descriptors.
pub fn decode_exercises(raw: &str) -> Result<Vec<Exercise>, serde_json::Error> {
    serde_json::from_str(raw)
}
