use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::auth::dto::{Credentials, LoginResponse, NewUser, UserResponse};
use crate::auth::jwt::JwtKeys;
use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::users::repo::{NewUserRecord, UserStore};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Registration: uniqueness check, hash, persist. The stored hash never
/// leaves the store layer.
///
/// The existence check and the insert are not atomic; the store's unique
/// index is the authoritative enforcement and its violation also surfaces
/// as `DuplicateEmail`.
pub async fn register(store: &dyn UserStore, input: &NewUser) -> Result<UserResponse, AppError> {
    if store.exists_by_email(&input.email).await? {
        warn!(email = %input.email, "signup with existing email");
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(&input.password)?;

    let user = store
        .create(NewUserRecord {
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash,
        })
        .await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(user.into())
}

/// Login: lookup, verify hash, issue token.
pub async fn login(
    store: &dyn UserStore,
    keys: &JwtKeys,
    input: &Credentials,
) -> Result<LoginResponse, AppError> {
    let user = store
        .find_by_email(&input.email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    if !verify_password(&input.password, &user.password_hash)? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys.sign(user.id)?;

    info!(user_id = user.id, "user logged in");
    Ok(LoginResponse {
        user: user.into(),
        token,
    })
}
