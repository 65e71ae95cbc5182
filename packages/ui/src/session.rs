//! Session context and hooks for the UI.

use api::{Credentials, Role, Session, ValidationError};
use dioxus::prelude::*;

/// Login state for the application.
///
/// There is exactly one transition: a successful login-form submission sets
/// the session. No logout exists; the state lives until the page reloads.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    /// Validate the submitted credentials and, on success, install the
    /// resulting session. Submitting again while signed in overwrites the
    /// previous session.
    ///
    /// On a password mismatch the state is left untouched.
    pub fn submit_login(&mut self, credentials: Credentials) -> Result<(), ValidationError> {
        self.session = Some(credentials.into_session()?);
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap your app with this component to enable login.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session_state = use_signal(SessionState::default);
    use_context_provider(|| session_state);

    rsx! {
        {children}
    }
}
