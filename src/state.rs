use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::books::repo::{BookStore, PgBookStore};
use crate::config::AppConfig;
use crate::users::repo::{PgUserStore, UserStore};

/// Shared application state. The stores are trait objects so tests can
/// swap the Postgres adapters for in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub books: Arc<dyn BookStore>,
}

impl AppState {
    /// Composition root: connects the pool and wires the concrete stores.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let users = Arc::new(PgUserStore::new(db.clone())) as Arc<dyn UserStore>;
        let books = Arc::new(PgBookStore::new(db.clone())) as Arc<dyn BookStore>;

        Ok(Self {
            db,
            config,
            users,
            books,
        })
    }

    pub fn from_parts(
        db: PgPool,
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        books: Arc<dyn BookStore>,
    ) -> Self {
        Self {
            db,
            config,
            users,
            books,
        }
    }
}
