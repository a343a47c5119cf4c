//! Spinner-delay timer for the route guard.
//!
//! [`use_auth_gate`] feeds the auth context and a cancellable timer into a
//! [`store::AuthGate`] and returns the current [`GatePhase`].

use std::time::Duration;

use dioxus::prelude::*;
use store::{AuthGate, GatePhase};

use crate::auth::use_auth;

async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

/// Track the guard phase for the current mount of the route at `path`.
///
/// Every change of the loading flag cancels the pending timer and arms a new
/// one with the flag captured at that moment. The timer task belongs to this
/// scope, so it is dropped on unmount.
pub fn use_auth_gate(spinner_delay: Duration, path: String) -> GatePhase {
    let auth = use_auth();
    let mut gate = use_signal(AuthGate::new);
    let mut timer = use_signal(|| Option::<Task>::None);

    use_effect(move || {
        let session = auth().session();
        gate.write().observe(session);

        if let Some(pending) = timer.write().take() {
            pending.cancel();
        }
        let loading = session.is_loading;
        let task = spawn(async move {
            sleep(spinner_delay).await;
            gate.write().delay_elapsed(loading);
        });
        timer.set(Some(task));
    });

    let session = auth().session();
    let phase = gate().decide(session);

    use_effect(use_reactive!(|(session, phase, path)| {
        tracing::debug!(
            authenticated = session.is_authenticated,
            loading = session.is_loading,
            initial_check_done = gate.peek().initial_check_done(),
            path = %path,
            ?phase,
            "Route guard state"
        );
    }));

    phase
}
