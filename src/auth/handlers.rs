use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::auth::dto::{Credentials, NewUser};
use crate::auth::jwt::JwtKeys;
use crate::auth::service::{self, is_valid_email};
use crate::error::AppError;
use crate::response::success;
use crate::state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<NewUser>,
) -> Result<Response, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if !is_valid_email(&payload.email) {
        return Err(AppError::Validation("Invalid email".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    let user = service::register(state.users.as_ref(), &payload).await?;
    Ok(success(StatusCode::CREATED, "Register success", user))
}

#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<Credentials>,
) -> Result<Response, AppError> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        return Err(AppError::Validation("Invalid email".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let res = service::login(state.users.as_ref(), &keys, &payload).await?;
    Ok(success(StatusCode::OK, "Login success", res))
}
