use tracing::info;

use crate::auth::dto::UserResponse;
use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::users::dto::UpdateUser;
use crate::users::repo::UserStore;

pub async fn get_user(store: &dyn UserStore, id: i64) -> Result<UserResponse, AppError> {
    let user = store.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;
    Ok(user.into())
}

pub async fn list_users(store: &dyn UserStore) -> Result<Vec<UserResponse>, AppError> {
    let users = store.list().await?;
    Ok(users.into_iter().map(Into::into).collect())
}

/// Applies only the non-empty input fields; a new password is re-hashed.
pub async fn update_user(
    store: &dyn UserStore,
    id: i64,
    input: &UpdateUser,
) -> Result<UserResponse, AppError> {
    let mut user = store.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;

    if !input.name.is_empty() {
        user.name = input.name.clone();
    }
    if !input.email.is_empty() {
        user.email = input.email.trim().to_lowercase();
    }
    if !input.password.is_empty() {
        user.password_hash = hash_password(&input.password)?;
    }

    let user = store.update(&user).await?;
    info!(user_id = user.id, "user updated");
    Ok(user.into())
}

/// Soft delete: the row is retained with its deletion marker set.
pub async fn delete_user(store: &dyn UserStore, id: i64) -> Result<UserResponse, AppError> {
    let user = store.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;
    store.delete(&user).await?;
    info!(user_id = user.id, "user deleted");
    Ok(user.into())
}
