//! Custom workout repository for database operations.

use domain::models::custom_workout::NewCustomWorkout;
use domain::models::exercise::encode_exercises;
use sqlx::SqlitePool;

use crate::entities::CustomWorkoutEntity;
use crate::metrics::QueryTimer;
use crate::repositories::RepositoryError;

/// Repository for date-pinned custom workouts.
#[derive(Clone)]
pub struct CustomWorkoutRepository {
    pool: SqlitePool,
}

impl CustomWorkoutRepository {
    /// Creates a new CustomWorkoutRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all custom workouts ordered by date.
    pub async fn list(&self) -> Result<Vec<CustomWorkoutEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_custom_workouts");
        let result = sqlx::query_as::<_, CustomWorkoutEntity>(
            r#"
            SELECT date, workout_name, exercises, focus, duration, created_by
            FROM custom_workouts
            ORDER BY date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert the workout for its date, replacing every column of an existing one.
    pub async fn upsert(&self, workout: &NewCustomWorkout) -> Result<(), RepositoryError> {
        let exercises = encode_exercises(&workout.exercises)?;

        let timer = QueryTimer::new("upsert_custom_workout");
        let result = sqlx::query(
            r#"
            INSERT INTO custom_workouts (date, workout_name, exercises, focus, duration, created_by)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(date) DO UPDATE SET
                workout_name = excluded.workout_name,
                exercises = excluded.exercises,
                focus = excluded.focus,
                duration = excluded.duration,
                created_by = excluded.created_by
            "#,
        )
        .bind(&workout.date)
        .bind(&workout.workout_name)
        .bind(exercises)
        .bind(&workout.focus)
        .bind(&workout.duration)
        .bind(&workout.created_by)
        .execute(&self.pool)
        .await;
        timer.record();
        result?;
        Ok(())
    }
}
