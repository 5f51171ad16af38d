//! Workout log repository for database operations.

use domain::models::workout_log::NewWorkoutLog;
use sqlx::SqlitePool;

use crate::entities::WorkoutLogEntity;
use crate::metrics::QueryTimer;

/// Repository for workout log database operations.
#[derive(Clone)]
pub struct WorkoutLogRepository {
    pool: SqlitePool,
}

impl WorkoutLogRepository {
    /// Creates a new WorkoutLogRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List logs, most recent first, optionally for a single user.
    pub async fn list(&self, user_id: Option<&str>) -> Result<Vec<WorkoutLogEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_workout_logs");
        let result = sqlx::query_as::<_, WorkoutLogEntity>(
            r#"
            SELECT id, user_id, date, time, workout_name, duration_minutes,
                   actual_duration_seconds, total_exercises, completed_exercises,
                   completion_rate, is_custom_workout
            FROM workout_logs
            WHERE (?1 IS NULL OR user_id = ?1)
            ORDER BY date DESC, time DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new log. Fails with a foreign key violation for unknown users.
    pub async fn create(&self, log: &NewWorkoutLog) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("create_workout_log");
        let result = sqlx::query(
            r#"
            INSERT INTO workout_logs (
                id, user_id, date, time, workout_name, duration_minutes,
                actual_duration_seconds, total_exercises, completed_exercises,
                completion_rate, is_custom_workout
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
        )
        .bind(&log.id)
        .bind(&log.user_id)
        .bind(&log.date)
        .bind(&log.time)
        .bind(&log.workout_name)
        .bind(log.duration_minutes)
        .bind(log.actual_duration_seconds)
        .bind(log.total_exercises)
        .bind(log.completed_exercises)
        .bind(log.completion_rate)
        .bind(i64::from(log.is_custom_workout))
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| ())
    }
}
