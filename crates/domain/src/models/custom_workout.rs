//! Custom workout domain models.
//!
//! A custom workout pins a workout to one calendar date. There is at most one
//! per date and saving again for the same date replaces it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::input::{is_missing_str, InputError, RequiredFields};
use crate::models::exercise::Exercise;

/// Represents a stored custom workout.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomWorkout {
    pub date: String,
    pub workout_name: String,
    pub exercises: Vec<Exercise>,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: Option<String>,
}

/// A custom workout as returned inside the date-keyed listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomWorkoutEntry {
    pub workout_name: String,
    pub exercises: Vec<Exercise>,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: Option<String>,
}

impl From<CustomWorkout> for CustomWorkoutEntry {
    fn from(w: CustomWorkout) -> Self {
        Self {
            workout_name: w.workout_name,
            exercises: w.exercises,
            focus: w.focus,
            duration: w.duration,
            created_by: w.created_by,
        }
    }
}

/// Response for listing custom workouts, keyed by `YYYY-MM-DD`.
pub type CustomWorkoutsByDate = BTreeMap<String, CustomWorkoutEntry>;

/// Groups custom workouts by their date.
pub fn group_by_date(workouts: Vec<CustomWorkout>) -> CustomWorkoutsByDate {
    workouts
        .into_iter()
        .map(|w| (w.date.clone(), w.into()))
        .collect()
}

/// Request payload for saving a custom workout.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveCustomWorkoutRequest {
    #[validate(custom(function = "shared::validation::validate_iso_date"))]
    pub date: Option<String>,

    #[validate(length(max = 100, message = "workoutName must be at most 100 characters"))]
    pub workout_name: Option<String>,

    #[validate(custom(function = "crate::models::exercise::validate_exercises"))]
    pub exercises: Option<Vec<Exercise>>,

    #[validate(length(max = 100, message = "focus must be at most 100 characters"))]
    pub focus: Option<String>,

    #[validate(length(max = 50, message = "duration must be at most 50 characters"))]
    pub duration: Option<String>,

    pub created_by: Option<String>,
}

impl RequiredFields for SaveCustomWorkoutRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_missing_str(&self.date) {
            missing.push("date");
        }
        if is_missing_str(&self.workout_name) {
            missing.push("workoutName");
        }
        if self.exercises.is_none() {
            missing.push("exercises");
        }
        missing
    }
}

/// A validated custom workout ready to be upserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomWorkout {
    pub date: String,
    pub workout_name: String,
    pub exercises: Vec<Exercise>,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: Option<String>,
}

impl TryFrom<SaveCustomWorkoutRequest> for NewCustomWorkout {
    type Error = InputError;

    fn try_from(request: SaveCustomWorkoutRequest) -> Result<Self, Self::Error> {
        request.check_required()?;
        request.validate()?;

        Ok(Self {
            date: request.date.unwrap_or_default(),
            workout_name: request.workout_name.unwrap_or_default().trim().to_string(),
            exercises: request.exercises.unwrap_or_default(),
            focus: request.focus,
            duration: request.duration,
            created_by: request.created_by,
        })
    }
}

/// Response body for a saved custom workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedCustomWorkoutResponse {
    pub message: String,
    pub date: String,
}
