//! # Database module: PostgreSQL connection pool management
//!
//! Shared pool used by every server function in the `api` crate. Gated behind
//! `#[cfg(feature = "server")]` so WASM builds never pull in SQLx.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! `DATABASE_URL` (via `dotenvy`), opens up to 5 connections, and caches the
//! result.
//!
//! [`MIGRATOR`] embeds `packages/api/migrations` (the `users` and
//! `user_progress` tables).

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, DbError};

#[cfg(feature = "server")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
