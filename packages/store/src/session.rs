//! # Route guard state machine
//!
//! [`AuthGate`] decides what a protected route shows for a given [`Session`].
//! It holds the two pieces of local state the guard needs:
//!
//! - `spinner_visible`: set when the spinner delay elapses while the session
//!   is still loading. Checks that finish faster than the delay never show it.
//! - `initial_check_done`: a one-way latch, set the first time loading is
//!   observed false. After that the loading flag is ignored and the decision
//!   comes from `is_authenticated` alone.
//!
//! The timer itself lives in the UI; this module only consumes its events so
//! the transitions can be tested without a runtime.

/// What the auth provider currently knows about the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Session {
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
        }
    }

    pub fn resolved(is_authenticated: bool) -> Self {
        Self {
            is_authenticated,
            is_loading: false,
        }
    }
}

/// Outcome of a guard decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    /// Still loading, spinner delay not yet elapsed. Renders nothing.
    Checking,
    /// Still loading past the delay. Renders the spinner.
    CheckingVisible,
    /// Not authenticated. Redirects to login.
    Denied,
    /// Authenticated. Renders the protected content.
    Granted,
}

impl GatePhase {
    pub fn shows_spinner(self) -> bool {
        matches!(self, GatePhase::CheckingVisible)
    }
}

/// Local state of one mounted route guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthGate {
    spinner_visible: bool,
    initial_check_done: bool,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a loading-flag change from the session provider.
    pub fn observe(&mut self, session: Session) {
        if !session.is_loading {
            self.initial_check_done = true;
        }
    }

    /// The spinner delay fired. `loading` is the flag captured when the
    /// timer was armed.
    pub fn delay_elapsed(&mut self, loading: bool) {
        self.spinner_visible = loading;
    }

    pub fn initial_check_done(&self) -> bool {
        self.initial_check_done
    }

    pub fn decide(&self, session: Session) -> GatePhase {
        if session.is_loading && !self.initial_check_done {
            if self.spinner_visible {
                GatePhase::CheckingVisible
            } else {
                GatePhase::Checking
            }
        } else if session.is_authenticated {
            GatePhase::Granted
        } else {
            GatePhase::Denied
        }
    }
}
