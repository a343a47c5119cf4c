//! # User model for authenticated users
//!
//! ## [`User`] (server only)
//!
//! The complete row from the `users` table, loaded with [`sqlx::FromRow`]:
//! `id`, `email`, `name`, `preferred_language` (the language being learned),
//! the Argon2 `password_hash`, and audit timestamps.
//!
//! ## [`UserInfo`]
//!
//! The client-safe projection that crosses the server/client boundary. It omits
//! the password hash and timestamps and carries the id as a `String` so it
//! works in WASM.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub preferred_language: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            preferred_language: self.preferred_language.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub preferred_language: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Uppercased first letter of the name, or `U` when there is none.
    pub fn initial(&self) -> char {
        self.name
            .as_deref()
            .and_then(|n| n.trim().chars().next())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "7d0c".to_string(),
            email: "asha@example.com".to_string(),
            name: name.map(str::to_string),
            preferred_language: "Hindi".to_string(),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(info(Some("Asha")).display_name(), "Asha");
        assert_eq!(info(None).display_name(), "asha@example.com");
    }

    #[test]
    fn test_initial() {
        assert_eq!(info(Some("asha")).initial(), 'A');
        assert_eq!(info(Some("  ")).initial(), 'U');
        assert_eq!(info(None).initial(), 'U');
    }
}
