//! Repository implementations for database operations.

pub mod custom_workout;
pub mod user;
pub mod workout_log;
pub mod workout_package;

pub use custom_workout::CustomWorkoutRepository;
pub use user::UserRepository;
pub use workout_log::WorkoutLogRepository;
pub use workout_package::WorkoutPackageRepository;

use thiserror::Error;

/// Errors from statements that store JSON-encoded columns.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Failed to encode JSON column: {0}")]
    Json(#[from] serde_json::Error),
}
