//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the app root as `RwSignal<AuthState>`. Read by route guards,
//! the navbar, and the API client (bearer token); written by login, logout,
//! and the 401 teardown path.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthSession, Role, User};

/// Authentication state tracking the signed-in user and their token.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    /// True until the persisted session has been restored or rejected.
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the persisted session has been checked.
    #[must_use]
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn sign_in(&mut self, session: AuthSession) {
        self.token = Some(session.token);
        self.user = Some(session.user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.is_authenticated() && self.role() == Some(role)
    }
}
