//! User CRUD endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::json::Json;
use crate::api::state::AppState;
use crate::domain::user::User;

/// Incoming user payload
///
/// `name` is the only caller-writable field. Identity and timestamps are
/// server-assigned; anything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub name: String,
}

/// Request to create a user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub user: Option<UserPayload>,
}

/// Request to update a user
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub user: Option<UserPayload>,
}

/// Single-user response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// User list response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
}

/// POST /v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let payload = match request.user {
        Some(payload) => payload,
        None => {
            warn!("Create request without a user object");
            return Err(ApiError::internal("Invalid parameter"));
        }
    };

    if payload.name.is_empty() {
        return Err(ApiError::internal("User name is empty"));
    }

    let mut user = User::new(Uuid::new_v4().to_string(), payload.name);

    state.users.create(&mut user).await.map_err(|err| {
        error!(id = %user.id, error = %err, "Failed to create user");
        ApiError::internal("Can not create user")
    })?;

    Ok(Json(UserResponse { user }))
}

/// GET /v1/users/{id}
pub async fn find_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(id = %id, "Fetching user");

    let user = state.users.find(&id).await.map_err(|err| {
        error!(id = %id, error = %err, "Failed to find user");
        ApiError::internal("Can not find user")
    })?;

    Ok(Json(UserResponse { user }))
}

/// PUT /v1/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let payload = match request.user {
        Some(payload) => payload,
        None => {
            warn!(id = %id, "Update request without a user object");
            return Err(ApiError::internal("Invalid parameter"));
        }
    };

    let mut user = state.users.find(&id).await.map_err(|err| {
        error!(id = %id, error = %err, "Failed to find user");
        ApiError::internal("Can not find user")
    })?;

    // The name is taken as-is, empty included; only the repository's id check
    // guards this write
    user.name = payload.name;

    state.users.update(&mut user).await.map_err(|err| {
        error!(id = %id, error = %err, "Failed to update user");
        ApiError::internal("Can not update user")
    })?;

    Ok(Json(UserResponse { user }))
}

/// DELETE /v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(&id).await.map_err(|err| {
        error!(id = %id, error = %err, "Failed to delete user");
        ApiError::internal("Can not delete user")
    })?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, ApiError> {
    debug!("Listing users");

    let users = state.users.list().await.map_err(|err| {
        error!(error = %err, "Failed to list users");
        ApiError::internal("Can not list users")
    })?;

    Ok(Json(UserListResponse { users }))
}
