//! Custom workout entity (database row mapping).

use domain::models::exercise::decode_exercises;
use sqlx::FromRow;

/// Database row mapping for the custom_workouts table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomWorkoutEntity {
    pub date: String,
    pub workout_name: String,
    pub exercises: String,
    pub focus: Option<String>,
    pub duration: Option<String>,
    pub created_by: Option<String>,
}

impl TryFrom<CustomWorkoutEntity> for domain::models::CustomWorkout {
    type Error = serde_json::Error;

    fn try_from(entity: CustomWorkoutEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            exercises: decode_exercises(&entity.exercises)?,
            date: entity.date,
            workout_name: entity.workout_name,
            focus: entity.focus,
            duration: entity.duration,
            created_by: entity.created_by,
        })
    }
}
