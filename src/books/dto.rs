use serde::{Deserialize, Serialize};

use crate::books::repo::Book;

/// Create payload; all fields required. Reused for updates, where empty
/// fields (zero for the year) are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year_published: i32,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author: String,
    pub year_published: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            description: book.description,
            author: book.author,
            year_published: book.year_published,
        }
    }
}
