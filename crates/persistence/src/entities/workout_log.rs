//! Workout log entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the workout_logs table.
///
/// SQLite has no boolean type, so `is_custom_workout` is stored as 0 or 1.
#[derive(Debug, Clone, FromRow)]
pub struct WorkoutLogEntity {
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
    pub is_custom_workout: i64,
}

impl From<WorkoutLogEntity> for domain::models::WorkoutLog {
    fn from(entity: WorkoutLogEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            date: entity.date,
            time: entity.time,
            workout_name: entity.workout_name,
            duration_minutes: entity.duration_minutes,
            actual_duration_seconds: entity.actual_duration_seconds,
            total_exercises: entity.total_exercises,
            completed_exercises: entity.completed_exercises,
            completion_rate: entity.completion_rate,
            is_custom_workout: entity.is_custom_workout != 0,
        }
    }
}
