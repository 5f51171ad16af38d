//! HTTP route handlers.

pub mod custom_workouts;
pub mod health;
pub mod users;
pub mod workout_logs;
pub mod workout_packages;

use domain::models::IdQuery;
use domain::InputError;

use crate::error::ApiError;

/// Pulls the `id` query parameter, treating blank values as absent.
pub(crate) fn required_id(query: IdQuery) -> Result<String, ApiError> {
    query
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| InputError::MissingFields(vec!["id"]).into())
}
