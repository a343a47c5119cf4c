//! Login page view with email/password form.

use std::str::FromStr;

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::{use_auth, AuthState};

use crate::Route;

/// Where to go after signing in. Falls back to the profile for empty,
/// unparseable, or public targets.
pub(crate) fn return_target(from: &str) -> Route {
    match Route::from_str(from) {
        Ok(route @ (Route::Profile {} | Route::Games {})) => route,
        _ => Route::Profile {},
    }
}

/// Login page component. `from` is the protected route that redirected here.
#[component]
pub fn Login(from: String) -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let target = return_target(&from);

    // Already signed in: forward straight away.
    let forward = target.clone();
    use_effect(move || {
        let state = auth();
        if !state.loading && state.user.is_some() {
            nav.replace(forward.clone());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let target = target.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                error.set(Some("Please enter your email and password".to_string()));
                return;
            }

            loading.set(true);
            match api::login_password(e, p).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    nav.replace(target);
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "HerVoice" }
            p { class: "auth-subtitle", "Sign in to continue learning" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    class: "auth-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "auth-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "New to HerVoice? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_to_protected_route() {
        assert_eq!(return_target("/games"), Route::Games {});
        assert_eq!(return_target("/profile"), Route::Profile {});
    }

    #[test]
    fn test_return_target_fallbacks() {
        assert_eq!(return_target(""), Route::Profile {});
        assert_eq!(return_target("/register"), Route::Profile {});
        assert_eq!(return_target("/no-such-page"), Route::Profile {});
    }

    #[test]
    fn test_redirect_carries_location() {
        let from = Route::Games {}.to_string();
        assert_eq!(from, "/games");
        assert_eq!(return_target(&from), Route::Games {});
    }
}
