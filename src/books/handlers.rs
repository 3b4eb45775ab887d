use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::books::dto::NewBook;
use crate::books::service;
use crate::error::AppError;
use crate::response::success;
use crate::state::AppState;

pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
}

fn validate_new_book(payload: &NewBook) -> Result<(), AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".into()));
    }
    if payload.author.trim().is_empty() {
        return Err(AppError::Validation("Author is required".into()));
    }
    if payload.year_published == 0 {
        return Err(AppError::Validation("Year published is required".into()));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<NewBook>,
) -> Result<Response, AppError> {
    validate_new_book(&payload)?;
    let book = service::create_book(state.books.as_ref(), &payload).await?;
    Ok(success(StatusCode::CREATED, "Create new book success", book))
}

#[instrument(skip(state))]
async fn list_books(State(state): State<AppState>) -> Result<Response, AppError> {
    let books = service::list_books(state.books.as_ref()).await?;
    Ok(success(StatusCode::OK, "Get all books success", books))
}

#[instrument(skip(state))]
async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let book = service::get_book(state.books.as_ref(), id).await?;
    Ok(success(StatusCode::OK, "Get book by id success", book))
}

#[instrument(skip(state, payload))]
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NewBook>,
) -> Result<Response, AppError> {
    let book = service::update_book(state.books.as_ref(), id, &payload).await?;
    Ok(success(StatusCode::OK, "Update book by id success", book))
}

#[instrument(skip(state))]
async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let book = service::delete_book(state.books.as_ref(), id).await?;
    Ok(success(StatusCode::OK, "Delete book by id success", book))
}
