//! Workout log domain models.
//!
//! A workout log records one completed (or partially completed) session for a
//! user. Logs belong to their user and disappear with it.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::input::{is_missing_str, InputError, RequiredFields};

lazy_static! {
    /// `HH:MM` or `HH:MM:SS`, 24-hour clock.
    static ref CLOCK_TIME: Regex =
        Regex::new(r"^([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").expect("valid clock time regex");
}

/// Represents a stored workout log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub workout_name: String,
    pub duration_minutes: i64,
    pub actual_duration_seconds: i64,
    pub total_exercises: i64,
    pub completed_exercises: i64,
    pub completion_rate: i64,
    pub is_custom_workout: bool,
}

/// Request payload for recording a workout log.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_exercise_counts"))]
pub struct CreateWorkoutLogRequest {
    pub user_id: Option<String>,

    #[validate(custom(function = "shared::validation::validate_iso_date"))]
    pub date: Option<String>,

    #[validate(regex(path = *CLOCK_TIME, message = "time must be HH:MM or HH:MM:SS"))]
    pub time: Option<String>,

    #[validate(length(max = 100, message = "workoutName must be at most 100 characters"))]
    pub workout_name: Option<String>,

    #[validate(range(min = 0, message = "durationMinutes must not be negative"))]
    pub duration_minutes: Option<i64>,

    #[validate(range(min = 0, message = "actualDurationSeconds must not be negative"))]
    pub actual_duration_seconds: Option<i64>,

    #[validate(range(min = 0, message = "totalExercises must not be negative"))]
    pub total_exercises: Option<i64>,

    #[validate(range(min = 0, message = "completedExercises must not be negative"))]
    pub completed_exercises: Option<i64>,

    #[validate(custom(function = "shared::validation::validate_completion_rate"))]
    pub completion_rate: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_custom_workout: Option<bool>,
}

/// Accepts `true`/`false` as well as the stored integer form `1`/`0`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(flag)) => Ok(Some(flag)),
        Some(Flag::Int(0)) => Ok(Some(false)),
        Some(Flag::Int(1)) => Ok(Some(true)),
        Some(Flag::Int(n)) => Err(de::Error::custom(format!(
            "isCustomWorkout must be true, false, 0 or 1 (got {n})"
        ))),
    }
}

fn validate_exercise_counts(request: &CreateWorkoutLogRequest) -> Result<(), ValidationError> {
    match (request.completed_exercises, request.total_exercises) {
        (Some(completed), Some(total)) if completed > total => {
            let mut err = ValidationError::new("completed_exceeds_total");
            err.message =
                Some("completedExercises must not exceed totalExercises".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

impl RequiredFields for CreateWorkoutLogRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_missing_str(&self.user_id) {
            missing.push("userId");
        }
        if is_missing_str(&self.date) {
            missing.push("date");
        }
        if is_missing_str(&self.time) {
            missing.push("time");
        }
        if is_missing_str(&self.workout_name) {
            missing.push("workoutName");
        }
        if self.total_exercises.is_none() {
            missing.push("totalExercises");
        }
        if self.completed_exercises.is_none() {
            missing.push("completedExercises");
        }
        missing
    }
}

/// Percentage of completed exercises, rounded to the nearest integer.
///
/// Returns 0 when there were no exercises.
pub fn compute_completion_rate(completed: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((completed as f64 * 100.0) / total as f64).round() as i64
}

/// A validated workout log ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutLog {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub workout_name: String,
    pub duration_minutes: i64,
    pub actual_duration_seconds: i64,
    pub total_exercises: i64,
    pub completed_exercises: i64,
    pub completion_rate: i64,
    pub is_custom_workout: bool,
}

impl TryFrom<CreateWorkoutLogRequest> for NewWorkoutLog {
    type Error = InputError;

    fn try_from(request: CreateWorkoutLogRequest) -> Result<Self, Self::Error> {
        request.check_required()?;
        request.validate()?;

        let total_exercises = request.total_exercises.unwrap_or_default();
        let completed_exercises = request.completed_exercises.unwrap_or_default();
        let completion_rate = request
            .completion_rate
            .unwrap_or_else(|| compute_completion_rate(completed_exercises, total_exercises));

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            user_id: request.user_id.unwrap_or_default(),
            date: request.date.unwrap_or_default(),
            time: request.time.unwrap_or_default(),
            workout_name: request.workout_name.unwrap_or_default().trim().to_string(),
            duration_minutes: request.duration_minutes.unwrap_or(0),
            actual_duration_seconds: request.actual_duration_seconds.unwrap_or(0),
            total_exercises,
            completed_exercises,
            completion_rate,
            is_custom_workout: request.is_custom_workout.unwrap_or(false),
        })
    }
}

/// Query parameters for listing workout logs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkoutLogsQuery {
    pub user_id: Option<String>,
}
