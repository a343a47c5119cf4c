//! # API crate: shared fullstack server functions for HerVoice
//!
//! Defines every Dioxus server function the web frontend calls, plus the
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` | Argon2 password hashing, session keys, registration validation |
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) and embedded migrations |
//! | [`models`] | - | `User` and `ProgressRow` rows, and the client-safe `UserInfo` |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is annotated with `#[get(...)]` or
//! `#[post(...)]` and compiled twice: once with the server logic (behind
//! `#[cfg(feature = "server")]`) and once as a client stub that forwards the
//! call over HTTP.
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Progress**: `get_user_progress`

use dioxus::prelude::*;

pub mod auth;
pub mod db;
pub mod models;

pub use models::UserInfo;
pub use store::ProgressRecord;

/// Error message of server functions that need a signed-in session.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::User;

    let Some(user_id) = auth::session_user_id(&session).await? else {
        return Ok(None);
    };

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.map(|u| u.to_info()))
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Register a new user with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(
    email: String,
    password: String,
    name: String,
    preferred_language: String,
) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let reg = auth::validate_registration(&email, &password, &name, &preferred_language)
        .map_err(|e| ServerFnError::new(e))?;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let existing: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM users WHERE email = $1")
        .bind(&reg.email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if existing.is_some() {
        return Err(ServerFnError::new("An account with this email already exists"));
    }

    let password_hash =
        auth::hash_password(&password).map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: models::User = sqlx::query_as(
        "INSERT INTO users (email, name, preferred_language, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(&reg.email)
    .bind(&reg.name)
    .bind(&reg.preferred_language)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user_id = %user.id, "Registered new user");
    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(
    email: String,
    password: String,
    name: String,
    preferred_language: String,
) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    use crate::db::get_pool;

    let email = email.trim().to_lowercase();

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user: Option<models::User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(user) = user else {
        return Err(ServerFnError::new("Invalid email or password"));
    };

    let valid = auth::verify_password(&password, &user.password_hash)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    if !valid {
        return Err(ServerFnError::new("Invalid email or password"));
    }

    session
        .insert(auth::SESSION_USER_ID_KEY, user.id.to_string())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user.to_info())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// All progress rows of `user_id`. Only the signed-in user may read their own rows.
#[cfg(feature = "server")]
#[get("/api/progress/:user_id", session: tower_sessions::Session)]
pub async fn get_user_progress(user_id: String) -> Result<Vec<ProgressRecord>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::ProgressRow;

    let current = auth::require_user_id(&session).await?;
    if current.to_string() != user_id {
        return Err(ServerFnError::new("Forbidden"));
    }

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let rows: Vec<ProgressRow> = sqlx::query_as(
        "SELECT user_id, course_id, progress, completed FROM user_progress WHERE user_id = $1",
    )
    .bind(current)
    .fetch_all(pool)
    .await
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(rows.iter().map(ProgressRow::to_record).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/progress/:user_id")]
pub async fn get_user_progress(user_id: String) -> Result<Vec<ProgressRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
