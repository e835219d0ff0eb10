//! Session state management using Dioxus signals
//!
//! Wraps [`AuthService`] so the forms, navbar and route guard all observe the
//! same `Signal<Session>`.

use dioxus::prelude::*;

use adgorithm_domain::{Identity, Role, Session};

use crate::application::services::AuthService;
use crate::state::PlatformStorageAdapter;
use crate::ui::Platform;

pub const LOGIN_FAILED: &str = "Invalid email or password";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Signed-in state shared by every page
#[derive(Clone)]
pub struct SessionState {
    auth: AuthService<PlatformStorageAdapter>,
    /// Current session; LoggedIn always carries a role
    pub session: Signal<Session>,
    /// Message for the login/register forms after a rejected submit
    pub last_error: Signal<Option<String>>,
}

impl SessionState {
    /// Create a SessionState restored from the persisted markers
    pub fn new(platform: Platform) -> Self {
        let auth = AuthService::new(PlatformStorageAdapter::new(platform));
        let restored = auth.restore();
        tracing::debug!(
            authenticated = restored.is_authenticated(),
            "Session restored"
        );

        Self {
            auth,
            session: Signal::new(restored),
            last_error: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Returns true when the visitor is now signed in
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let result = self.auth.login(email, password);
        self.settle(result.map_err(|e| {
            tracing::debug!("Login rejected: {}", e);
            LOGIN_FAILED
        }))
    }

    /// Demo sign-in with an explicit role
    pub fn login_as(&mut self, email: &str, password: &str, role: Role) -> bool {
        let result = self.auth.login_as(email, password, role);
        self.settle(result.map_err(|e| {
            tracing::debug!("Login rejected: {}", e);
            LOGIN_FAILED
        }))
    }

    pub fn register(&mut self, name: &str, email: &str, password: &str, role: Role) -> bool {
        let result = self.auth.register(name, email, password, role);
        self.settle(result.map_err(|e| {
            tracing::debug!("Registration rejected: {}", e);
            REGISTRATION_FAILED
        }))
    }

    pub fn logout(&mut self) {
        self.auth.logout();
        self.session.set(Session::LoggedOut);
        self.last_error.set(None);
    }

    /// Re-read the markers after another tab changed them.
    ///
    /// Returns true when the session actually changed.
    pub fn refresh_from_storage(&mut self) -> bool {
        let restored = self.auth.restore();
        if *self.session.peek() == restored {
            return false;
        }
        tracing::info!(
            authenticated = restored.is_authenticated(),
            "Session changed in another window"
        );
        self.session.set(restored);
        true
    }

    pub fn clear_error(&mut self) {
        self.last_error.set(None);
    }

    fn settle(&mut self, result: Result<Identity, &'static str>) -> bool {
        match result {
            Ok(identity) => {
                self.session.set(Session::LoggedIn(identity));
                self.last_error.set(None);
                true
            }
            Err(message) => {
                self.last_error.set(Some(message.to_string()));
                false
            }
        }
    }
}
