//! Workout package endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::workout_package::{CreateWorkoutPackageRequest, NewWorkoutPackage};
use domain::models::{CreatedResponse, IdQuery, MessageResponse, WorkoutPackage};
use persistence::repositories::WorkoutPackageRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::{record_resource_created, record_resource_deleted};
use crate::routes::required_id;

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE";

/// List all workout packages, newest first.
///
/// GET /api/workout-packages
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkoutPackage>>, ApiError> {
    let pool = state.store.ready().await?;
    let packages = WorkoutPackageRepository::new(pool.clone())
        .list()
        .await?
        .into_iter()
        .map(WorkoutPackage::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(packages))
}

/// Create a workout package.
///
/// POST /api/workout-packages
pub async fn create_package(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateWorkoutPackageRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let pool = state.store.ready().await?;
    let package = NewWorkoutPackage::try_from(request)?;

    WorkoutPackageRepository::new(pool.clone())
        .create(&package)
        .await?;

    record_resource_created("workout_package");
    info!(
        package_id = %package.id,
        exercises = package.exercises.len(),
        "Workout package created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Workout package added successfully",
            package.id,
        )),
    ))
}

/// Delete a workout package.
///
/// DELETE /api/workout-packages?id=<id>
pub async fn delete_package(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = state.store.ready().await?;
    let id = required_id(query)?;

    let deleted = WorkoutPackageRepository::new(pool.clone())
        .delete(&id)
        .await?;
    if !deleted {
        return Err(ApiError::NotFound("Workout package not found".to_string()));
    }

    record_resource_deleted("workout_package");
    info!(package_id = %id, "Workout package deleted");

    Ok(Json(MessageResponse::new(
        "Workout package deleted successfully",
    )))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(ALLOWED_METHODS)
}
