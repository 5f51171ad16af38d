//! User profile endpoint handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use domain::models::user::{is_reserved_user_id, CreateUserRequest, NewUser};
use domain::models::{CreatedResponse, IdQuery, MessageResponse, User};
use persistence::repositories::UserRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::JsonBody;
use crate::middleware::metrics::{record_resource_created, record_resource_deleted};
use crate::routes::required_id;

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE";

/// List all users.
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let pool = state.store.ready().await?;
    let users = UserRepository::new(pool.clone()).list().await?;
    Ok(Json(users.into_iter().map(User::from).collect()))
}

/// Create a user. The id is derived from the name.
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let pool = state.store.ready().await?;
    let user = NewUser::try_from(request)?;

    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => {
                ApiError::Conflict(format!("User with id '{}' already exists", user.id))
            }
            other => other,
        })?;

    record_resource_created("user");
    info!(user_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("User added successfully", user.id)),
    ))
}

/// Delete a user and, through the cascade, their workout logs.
///
/// DELETE /api/users?id=<id>
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let pool = state.store.ready().await?;
    let id = required_id(query)?;

    if is_reserved_user_id(&id) {
        return Err(ApiError::Forbidden(
            "Cannot delete default system users.".to_string(),
        ));
    }

    let deleted = UserRepository::new(pool.clone()).delete(&id).await?;
    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    record_resource_deleted("user");
    info!(user_id = %id, "User deleted");

    Ok(Json(MessageResponse::new("User deleted successfully")))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed(ALLOWED_METHODS)
}
