//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod custom_workout;
pub mod user;
pub mod workout_log;
pub mod workout_package;

pub use custom_workout::CustomWorkoutEntity;
pub use user::UserEntity;
pub use workout_log::WorkoutLogEntity;
pub use workout_package::WorkoutPackageEntity;
