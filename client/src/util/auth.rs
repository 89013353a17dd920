//! Role routing for sign-in and guarded pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded pages share one wrong-role redirect, and sign-in flows share one
//! landing page per role.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Where a page restricted to `role` should send the current visitor, if
/// anywhere. Nothing happens while the session is still being restored.
#[must_use]
pub fn role_guard_target(state: &AuthState, role: Role) -> Option<&'static str> {
    if state.loading || state.has_role(role) {
        None
    } else {
        Some("/login")
    }
}

/// First page after signing in.
#[must_use]
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Provider => "/provider/dashboard",
        Role::Client => "/",
    }
}

/// Redirect away from a page reserved for `role`.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, role: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = role_guard_target(&auth.get(), role) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Full page navigation, used when router context is unavailable (the API
/// client's 401 path).
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = path;
}
