//! Light/dark theme context.
//!
//! The choice is stored in `localStorage` under [`THEME_STORAGE_KEY`] and
//! applied as the `dark` class on `<html>`. Outside the browser both are no-ops.

use dioxus::prelude::*;

pub const THEME_STORAGE_KEY: &str = "hervoice-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// "Light" or "Dark", for labels.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Flip the theme, persist it, and return the new value.
pub fn toggle_theme(theme: &mut ThemeSignal) -> Theme {
    let next = theme.peek().toggled();
    apply_theme(next);
    theme.set(next);
    next
}

/// Provides the theme context, restoring the stored choice on mount.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(Theme::default()));

    use_effect(move || {
        if let Some(stored) = load_theme_from_storage() {
            theme.set(stored);
        }
        apply_theme(*theme.peek());
    });

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_theme_from_storage() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(THEME_STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme_from_storage() -> Option<Theme> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Theme) {}
