//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cartwright_core::UserId;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::User;
use crate::state::AppState;

/// List all users.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users))
}

/// Get one user by ID.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<User>> {
    let user = UserRepository::new(state.pool())
        .get_by_id(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("no user with this id".to_string()))?;

    Ok(Json(user))
}

/// Delete a user. Requires an authenticated session.
#[instrument(skip(state, _auth))]
pub async fn destroy(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let deleted = UserRepository::new(state.pool())
        .delete(UserId::new(id))
        .await?;

    if !deleted {
        return Err(AppError::NotFound("no user with this id".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "user deleted" })))
}
