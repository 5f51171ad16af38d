//! Workout package domain models.
//!
//! A workout package is a named, reusable template of exercises.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::input::{is_missing_str, InputError, RequiredFields};
use crate::models::exercise::Exercise;

/// Represents a stored workout package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPackage {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

/// Request payload for creating a workout package.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutPackageRequest {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "crate::models::exercise::validate_exercises"))]
    pub exercises: Option<Vec<Exercise>>,

    #[validate(length(max = 100, message = "focus must be at most 100 characters"))]
    pub focus: Option<String>,

    #[validate(length(max = 50, message = "duration must be at most 50 characters"))]
    pub duration: Option<String>,

    pub created_by: Option<String>,

    pub created_at: Option<String>,
}

impl RequiredFields for CreateWorkoutPackageRequest {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_missing_str(&self.name) {
            missing.push("name");
        }
        if self.exercises.is_none() {
            missing.push("exercises");
        }
        if is_missing_str(&self.created_by) {
            missing.push("createdBy");
        }
        missing
    }
}

/// A validated workout package ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkoutPackage {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl TryFrom<CreateWorkoutPackageRequest> for NewWorkoutPackage {
    type Error = InputError;

    fn try_from(request: CreateWorkoutPackageRequest) -> Result<Self, Self::Error> {
        request.check_required()?;
        request.validate()?;

        let created_at = request
            .created_at
            .filter(|s| !shared::validation::is_blank(s))
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            name: request.name.unwrap_or_default().trim().to_string(),
            exercises: request.exercises.unwrap_or_default(),
            focus: request.focus,
            duration: request.duration,
            created_by: request.created_by.unwrap_or_default(),
            created_at,
        })
    }
}
