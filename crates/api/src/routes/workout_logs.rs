//! Workout log endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::workout_log::{CreateWorkoutLogRequest, ListWorkoutLogsQuery, NewWorkoutLog};
use domain::models::{CreatedResponse, WorkoutLog};
use persistence::repositories::WorkoutLogRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::record_resource_created;

pub const ALLOWED_METHODS: &str = "GET, POST";

/// List workout logs, most recent first.
///
/// GET /api/workout-logs[?userId=<id>]
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<ListWorkoutLogsQuery>,
) -> Result<Json<Vec<WorkoutLog>>, ApiError> {
    let pool = state.store.ready().await?;
    let user_id = query.user_id.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let logs = WorkoutLogRepository::new(pool.clone()).list(user_id).await?;
    Ok(Json(logs.into_iter().map(WorkoutLog::from).collect()))
}

/// Record a workout log.
///
/// POST /api/workout-logs
pub async fn create_log(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateWorkoutLogRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let pool = state.store.ready().await?;
    let log = NewWorkoutLog::try_from(request)?;

    WorkoutLogRepository::new(pool.clone())
        .create(&log)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::NotFound(_) => ApiError::NotFound(format!("User '{}' not found", log.user_id)),
            other => other,
        })?;

    record_resource_created("workout_log");
    info!(
        log_id = %log.id,
        user_id = %log.user_id,
        completion_rate = log.completion_rate,
        "Workout log created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Workout log added successfully", log.id)),
    ))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(ALLOWED_METHODS)
}
