//! Custom workout endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::custom_workout::{
    group_by_date, CustomWorkoutsByDate, NewCustomWorkout, SaveCustomWorkoutRequest,
    SavedCustomWorkoutResponse,
};
use domain::models::CustomWorkout;
use persistence::repositories::CustomWorkoutRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_resource_created;

pub const ALLOWED_METHODS: &str = "GET, POST";

/// List custom workouts keyed by date.
///
/// GET /api/custom-workouts
pub async fn list_custom_workouts(
    State(state): State<AppState>,
) -> Result<Json<CustomWorkoutsByDate>, ApiError> {
    let pool = state.store.ready().await?;
    let workouts = CustomWorkoutRepository::new(pool.clone())
        .list()
        .await?
        .into_iter()
        .map(CustomWorkout::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(group_by_date(workouts)))
}

/// Save the custom workout for a date, replacing any existing one.
///
/// POST /api/custom-workouts
pub async fn save_custom_workout(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SaveCustomWorkoutRequest>,
) -> Result<(StatusCode, Json<SavedCustomWorkoutResponse>), ApiError> {
    let pool = state.store.ready().await?;
    let workout = NewCustomWorkout::try_from(request)?;

    CustomWorkoutRepository::new(pool.clone())
        .upsert(&workout)
        .await?;

    record_resource_created("custom_workout");
    info!(date = %workout.date, "Custom workout saved");

    Ok((
        StatusCode::CREATED,
        Json(SavedCustomWorkoutResponse {
            message: "Custom workout saved successfully".to_string(),
            date: workout.date,
        }),
    ))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(ALLOWED_METHODS)
}
