use tracing::info;

use crate::books::dto::{BookResponse, NewBook};
use crate::books::repo::{BookStore, NewBookRecord};
use crate::error::AppError;

pub async fn create_book(store: &dyn BookStore, input: &NewBook) -> Result<BookResponse, AppError> {
    let book = store
        .create(NewBookRecord {
            title: input.title.clone(),
            description: input.description.clone(),
            author: input.author.clone(),
            year_published: input.year_published,
        })
        .await?;
    info!(book_id = book.id, "book created");
    Ok(book.into())
}

pub async fn get_book(store: &dyn BookStore, id: i64) -> Result<BookResponse, AppError> {
    let book = store.find_by_id(id).await?.ok_or(AppError::BookNotFound)?;
    Ok(book.into())
}

pub async fn list_books(store: &dyn BookStore) -> Result<Vec<BookResponse>, AppError> {
    let books = store.list().await?;
    Ok(books.into_iter().map(Into::into).collect())
}

/// Applies only the non-empty fields (non-zero for the year).
pub async fn update_book(
    store: &dyn BookStore,
    id: i64,
    input: &NewBook,
) -> Result<BookResponse, AppError> {
    let mut book = store.find_by_id(id).await?.ok_or(AppError::BookNotFound)?;

    if !input.title.is_empty() {
        book.title = input.title.clone();
    }
    if !input.description.is_empty() {
        book.description = input.description.clone();
    }
    if !input.author.is_empty() {
        book.author = input.author.clone();
    }
    if input.year_published != 0 {
        book.year_published = input.year_published;
    }

    let book = store.update(&book).await?;
    info!(book_id = book.id, "book updated");
    Ok(book.into())
}

pub async fn delete_book(store: &dyn BookStore, id: i64) -> Result<BookResponse, AppError> {
    let book = store.find_by_id(id).await?.ok_or(AppError::BookNotFound)?;
    store.delete(&book).await?;
    info!(book_id = book.id, "book deleted");
    Ok(book.into())
}
