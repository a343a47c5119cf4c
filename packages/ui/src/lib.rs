//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, toggle_theme, use_theme, Theme, ThemeProvider, ThemeSignal};

mod gate;
pub use gate::use_auth_gate;

mod progress;
pub use progress::ApiProgressSource;
