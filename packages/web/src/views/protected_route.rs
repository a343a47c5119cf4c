//! Layout that only renders its child routes for signed-in users.

use dioxus::prelude::*;
use store::{GatePhase, HerVoiceConfig};
use ui::use_auth_gate;

use crate::Route;

/// The login route that brings the user back to `route` afterwards.
fn login_redirect(route: &Route) -> Route {
    Route::Login {
        from: route.to_string(),
    }
}

/// Route guard around every protected route.
///
/// - still checking, under the spinner delay: renders nothing
/// - still checking, past the delay: renders the loading placeholder
/// - signed out: replaces the route with `/login?from=<current route>`
/// - signed in: renders the child route
#[component]
pub fn ProtectedRoute() -> Element {
    let config = use_context::<HerVoiceConfig>();
    let route = use_route::<Route>();
    let phase = use_auth_gate(config.guard.spinner_delay(), route.to_string());
    let nav = use_navigator();

    use_effect(use_reactive!(|(phase, route)| {
        match phase {
            GatePhase::Denied => {
                tracing::info!(from = %route, "Not authenticated, redirecting to login");
                nav.replace(login_redirect(&route));
            }
            GatePhase::Granted => {
                tracing::debug!(path = %route, "Authenticated, rendering protected content");
            }
            GatePhase::Checking | GatePhase::CheckingVisible => {}
        }
    }));

    match phase {
        GatePhase::Granted => rsx! {
            Outlet::<Route> {}
        },
        GatePhase::CheckingVisible => rsx! {
            div {
                class: "auth-pending",
                div { class: "auth-pending-text", "Loading authentication state..." }
            }
        },
        GatePhase::Checking | GatePhase::Denied => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::str::FromStr;
    use std::time::Duration;

    use dioxus::core::NoOpMutations;
    use dioxus_history::{History, MemoryHistory};
    use ui::AuthState;

    use super::*;

    #[derive(Props, Clone)]
    struct RouterHarnessProps {
        history: Rc<MemoryHistory>,
        auth: AuthState,
    }

    impl PartialEq for RouterHarnessProps {
        fn eq(&self, _other: &Self) -> bool {
            true
        }
    }

    #[component]
    fn RouterHarness(props: RouterHarnessProps) -> Element {
        use_context_provider(|| props.history.clone() as Rc<dyn History>);
        use_context_provider(HerVoiceConfig::default);
        use_context_provider(|| Signal::new(props.auth.clone()));
        rsx! { Router::<Route> {} }
    }

    fn drive_dom(dom: &mut VirtualDom) {
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
        dom.process_events();
    }

    async fn open(path: &str, auth: AuthState) -> (VirtualDom, Rc<MemoryHistory>) {
        let history = Rc::new(MemoryHistory::with_initial_path(path));
        let mut dom = VirtualDom::new_with_props(
            RouterHarness,
            RouterHarnessProps {
                history: history.clone(),
                auth,
            },
        );
        dom.rebuild_in_place();
        for _ in 0..3 {
            drive_dom(&mut dom);
            let _ = tokio::time::timeout(Duration::from_millis(1), dom.wait_for_work()).await;
        }
        drive_dom(&mut dom);
        (dom, history)
    }

    #[test]
    fn test_login_redirect_carries_route() {
        let target = login_redirect(&Route::Games {});
        assert_eq!(
            target,
            Route::Login {
                from: "/games".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_out_visit_replaces_with_login() {
        let (_dom, history) = open("/games", AuthState::signed_out()).await;

        let current = history.current_route();
        assert_eq!(
            Route::from_str(&current).ok(),
            Some(Route::Login {
                from: "/games".to_string()
            }),
            "landed on {current}"
        );
        // Replaced, not pushed: there is nothing to go back to.
        assert!(!history.can_go_back());
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_in_visit_stays() {
        let user = api::UserInfo {
            id: "u-1".to_string(),
            email: "asha@example.com".to_string(),
            name: None,
            preferred_language: "English".to_string(),
        };
        let (_dom, history) = open("/games", AuthState::signed_in(user)).await;

        assert_eq!(history.current_route(), "/games");
    }
}
