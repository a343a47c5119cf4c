//! Authentication module for email + password accounts.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password, PasswordError, MIN_PASSWORD_LEN};
#[cfg(feature = "server")]
pub use session::{
    require_user_id, session_user_id, validate_registration, Registration, SESSION_USER_ID_KEY,
};
