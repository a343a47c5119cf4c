//! Data models for the application.

#[cfg(feature = "server")]
mod progress;
mod user;

#[cfg(feature = "server")]
pub use progress::ProgressRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
