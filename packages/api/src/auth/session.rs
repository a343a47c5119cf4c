//! Session keys and registration checks.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;
use uuid::Uuid;

use super::password::MIN_PASSWORD_LEN;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Read the signed-in user's id from the session, if any.
pub async fn session_user_id(session: &Session) -> Result<Option<Uuid>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    user_id
        .map(|id| Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string())))
        .transpose()
}

/// Like [`session_user_id`] but fails when nobody is signed in.
pub async fn require_user_id(session: &Session) -> Result<Uuid, ServerFnError> {
    session_user_id(session)
        .await?
        .ok_or_else(|| ServerFnError::new(crate::NOT_AUTHENTICATED))
}

/// Normalised registration input.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub name: String,
    pub preferred_language: String,
}

/// Trim and validate registration fields, lowercasing the email.
pub fn validate_registration(
    email: &str,
    password: &str,
    name: &str,
    preferred_language: &str,
) -> Result<Registration, &'static str> {
    let email = email.trim().to_lowercase();
    let name = name.trim().to_string();
    let preferred_language = match preferred_language.trim() {
        "" => "English".to_string(),
        lang => lang.to_string(),
    };

    if email.is_empty() || !email.contains('@') {
        return Err("Invalid email address");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters");
    }
    if name.is_empty() {
        return Err("Name is required");
    }

    Ok(Registration {
        email,
        name,
        preferred_language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_registration_is_normalised() {
        let reg = validate_registration("  Asha@Example.COM ", "longenough", " Asha ", "").unwrap();
        assert_eq!(reg.email, "asha@example.com");
        assert_eq!(reg.name, "Asha");
        assert_eq!(reg.preferred_language, "English");
    }

    #[test]
    fn test_invalid_registration() {
        assert_eq!(
            validate_registration("no-at-sign", "longenough", "Asha", "Hindi"),
            Err("Invalid email address")
        );
        assert_eq!(
            validate_registration("a@b.c", "short", "Asha", "Hindi"),
            Err("Password must be at least 8 characters")
        );
        assert_eq!(
            validate_registration("a@b.c", "longenough", "   ", "Hindi"),
            Err("Name is required")
        );
    }
}
