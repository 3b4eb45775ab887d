use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::AppError;

/// Book row, soft-deleted like users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    pub year_published: i32,
    pub created_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

impl Book {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewBookRecord {
    pub title: String,
    pub description: String,
    pub author: String,
    pub year_published: i32,
}

/// Persistence contract for books; same not-found convention as users.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn create(&self, new: NewBookRecord) -> Result<Book, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;
    async fn list(&self) -> Result<Vec<Book>, AppError>;
    async fn update(&self, book: &Book) -> Result<Book, AppError>;
    async fn delete(&self, book: &Book) -> Result<(), AppError>;
}

pub struct PgBookStore {
    db: PgPool,
}

impl PgBookStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn create(&self, new: NewBookRecord) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, description, author, year_published)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, author, year_published, created_at, deleted_at
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(&new.author)
        .bind(new.year_published)
        .fetch_one(&self.db)
        .await?;
        Ok(book)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, author, year_published, created_at, deleted_at
            FROM books
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, author, year_published, created_at, deleted_at
            FROM books
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(books)
    }

    async fn update(&self, book: &Book) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = $1, description = $2, author = $3, year_published = $4
            WHERE id = $5 AND deleted_at IS NULL
            RETURNING id, title, description, author, year_published, created_at, deleted_at
            "#,
        )
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.author)
        .bind(book.year_published)
        .bind(book.id)
        .fetch_one(&self.db)
        .await?;
        Ok(book)
    }

    async fn delete(&self, book: &Book) -> Result<(), AppError> {
        sqlx::query(r#"UPDATE books SET deleted_at = now() WHERE id = $1 AND deleted_at IS NULL"#)
            .bind(book.id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
