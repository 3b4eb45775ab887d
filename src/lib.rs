pub mod app;
pub mod auth;
pub mod books;
pub mod config;
pub mod error;
pub mod response;
pub mod state;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

use crate::state::AppState;

/// Builds the application state, applies migrations and serves the API.
pub async fn run() -> anyhow::Result<()> {
    let state = AppState::init().await?;

    if let Err(e) = sqlx::migrate!("./migrations").run(&state.db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    let app = app::build_app(state);
    app::serve(app).await
}
