//! Authentication context and hooks for the UI.

use api::UserInfo;
use dioxus::prelude::*;
use store::Session;

use crate::components::{Button, ButtonVariant};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    /// The two flags the route guard decides on.
    pub fn session(&self) -> Session {
        Session {
            is_authenticated: self.user.is_some(),
            is_loading: self.loading,
        }
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                // A failed check counts as signed out.
                tracing::warn!("Session check failed: {}", e);
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Clears the auth context and then calls `on_logged_out`; the caller decides
/// where to navigate.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = ButtonVariant::Outline)] variant: ButtonVariant,
    #[props(default = "".to_string())] class: String,
    on_logged_out: EventHandler<()>,
    children: Element,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        spawn(async move {
            match api::logout().await {
                Ok(()) => {
                    auth_state.set(AuthState::signed_out());
                    on_logged_out.call(());
                }
                Err(e) => tracing::error!("Logout failed: {}", e),
            }
        });
    };

    rsx! {
        Button {
            variant: variant,
            class: class,
            onclick: onclick,
            {children}
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            email: "asha@example.com".to_string(),
            name: Some("Asha".to_string()),
            preferred_language: "Hindi".to_string(),
        }
    }

    #[test]
    fn test_default_is_loading() {
        let state = AuthState::default();
        assert_eq!(state.session(), Session::loading());
        assert!(state.user_id().is_none());
    }

    #[test]
    fn test_session_flags() {
        assert_eq!(AuthState::signed_in(user()).session(), Session::resolved(true));
        assert_eq!(AuthState::signed_out().session(), Session::resolved(false));
        assert_eq!(AuthState::signed_in(user()).user_id().as_deref(), Some("u-1"));
    }

    #[component]
    fn SignOutHarness() -> Element {
        use_context_provider(|| Signal::new(AuthState::signed_in(user())));
        rsx! {
            LogoutButton { class: "sign-out", on_logged_out: move |_| {} }
        }
    }

    #[test]
    fn test_logout_button_defaults_to_outline() {
        let mut dom = VirtualDom::new(SignOutHarness);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("button button-outline sign-out"), "missing outline class in {html}");
        assert!(html.contains("Sign Out"), "missing label in {html}");
    }
}
