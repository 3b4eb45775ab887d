use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::auth::guard::validate_owner;
use crate::auth::jwt::AuthUser;
use crate::auth::service::is_valid_email;
use crate::error::AppError;
use crate::response::success;
use crate::state::AppState;
use crate::users::dto::UpdateUser;
use crate::users::service;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

#[instrument(skip(state))]
async fn list_users(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
) -> Result<Response, AppError> {
    let users = service::list_users(state.users.as_ref()).await?;
    Ok(success(StatusCode::OK, "Get all users success", users))
}

#[instrument(skip(state))]
async fn get_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    validate_owner(caller, id)?;
    let user = service::get_user(state.users.as_ref(), id).await?;
    Ok(success(StatusCode::OK, "Get user success", user))
}

#[instrument(skip(state, payload))]
async fn update_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> Result<Response, AppError> {
    validate_owner(caller, id)?;

    if !payload.email.is_empty() && !is_valid_email(payload.email.trim()) {
        return Err(AppError::Validation("Invalid email".into()));
    }

    let user = service::update_user(state.users.as_ref(), id, &payload).await?;
    Ok(success(StatusCode::OK, "Update user success", user))
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    validate_owner(caller, id)?;
    let user = service::delete_user(state.users.as_ref(), id).await?;
    Ok(success(StatusCode::OK, "Delete user success", user))
}
