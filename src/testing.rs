//! In-memory store fakes for unit tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::auth::password::hash_password;
use crate::books::repo::{Book, BookStore, NewBookRecord};
use crate::error::AppError;
use crate::users::repo::{NewUserRecord, User, UserStore};

pub fn mem_user(name: &str, email: &str, password: &str) -> NewUserRecord {
    NewUserRecord {
        name: name.into(),
        email: email.into(),
        password_hash: hash_password(password).expect("hash"),
    }
}

#[derive(Default)]
pub struct MemUserStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl MemUserStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub async fn seed(&self, new: NewUserRecord) -> User {
        self.create(new).await.expect("seed user")
    }
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn create(&self, new: NewUserRecord) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| !u.is_deleted() && u.email == new.email)
        {
            return Err(AppError::DuplicateEmail);
        }
        let user = User {
            id: self.next_id(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: OffsetDateTime::now_utc(),
            deleted_at: None,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id == id && !u.is_deleted())
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email && !u.is_deleted())
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().filter(|u| !u.is_deleted()).cloned().collect())
    }

    async fn update(&self, user: &User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id && !u.is_deleted())
            .ok_or(sqlx::Error::RowNotFound)?;
        slot.name = user.name.clone();
        slot.email = user.email.clone();
        slot.password_hash = user.password_hash.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if let Some(slot) = users.iter_mut().find(|u| u.id == user.id && !u.is_deleted()) {
            slot.deleted_at = Some(OffsetDateTime::now_utc());
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemBookStore {
    books: Mutex<Vec<Book>>,
    next_id: AtomicI64,
}

impl MemBookStore {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[async_trait]
impl BookStore for MemBookStore {
    async fn create(&self, new: NewBookRecord) -> Result<Book, AppError> {
        let mut books = self.books.lock().unwrap();
        let book = Book {
            id: self.next_id(),
            title: new.title,
            description: new.description,
            author: new.author,
            year_published: new.year_published,
            created_at: OffsetDateTime::now_utc(),
            deleted_at: None,
        };
        books.push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let books = self.books.lock().unwrap();
        Ok(books
            .iter()
            .find(|b| b.id == id && !b.is_deleted())
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = self.books.lock().unwrap();
        Ok(books.iter().filter(|b| !b.is_deleted()).cloned().collect())
    }

    async fn update(&self, book: &Book) -> Result<Book, AppError> {
        let mut books = self.books.lock().unwrap();
        let slot = books
            .iter_mut()
            .find(|b| b.id == book.id && !b.is_deleted())
            .ok_or(sqlx::Error::RowNotFound)?;
        slot.title = book.title.clone();
        slot.description = book.description.clone();
        slot.author = book.author.clone();
        slot.year_published = book.year_published;
        Ok(slot.clone())
    }

    async fn delete(&self, book: &Book) -> Result<(), AppError> {
        let mut books = self.books.lock().unwrap();
        if let Some(slot) = books.iter_mut().find(|b| b.id == book.id && !b.is_deleted()) {
            slot.deleted_at = Some(OffsetDateTime::now_utc());
        }
        Ok(())
    }
}
