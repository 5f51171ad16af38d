//! Domain models for FitTrack.

pub mod custom_workout;
pub mod exercise;
pub mod user;
pub mod workout_log;
pub mod workout_package;

use serde::{Deserialize, Serialize};

pub use custom_workout::CustomWorkout;
pub use exercise::Exercise;
pub use user::User;
pub use workout_log::WorkoutLog;
pub use workout_package::WorkoutPackage;

/// Query parameters for endpoints addressing a single row by id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

/// Response body for successful creations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedResponse {
    pub message: String,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: id.into(),
        }
    }
}

/// Response body carrying only a status message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
