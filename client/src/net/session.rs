//! Session lifecycle: restore, login, register, logout, and 401 teardown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Glues `ApiClient`, the shared `AuthState` signal, and `util::storage`
//! together so pages never touch persistence directly.

use leptos::prelude::*;

use super::api::{ApiClient, ApiError};
use super::types::{LoginRequest, RegisterRequest, User};
use crate::state::auth::AuthState;
use crate::util::storage;

/// Restore the persisted session on startup, then refresh the user record
/// from `/auth/me`. A rejected token is torn down by the API client.
pub fn restore(api: &ApiClient) {
    let auth = api.auth();
    let Some(session) = storage::load_session() else {
        auth.update(AuthState::sign_out);
        return;
    };
    auth.update(|state| state.sign_in(session));

    let api = api.clone();
    leptos::task::spawn_local(async move {
        match api.me().await {
            Ok(user) => remember_user(auth, user),
            Err(ApiError::Unauthorized) => {}
            Err(e) => leptos::logging::warn!("session refresh failed: {e}"),
        }
    });
}

/// Log in and persist the session. Returns the signed-in user.
///
/// # Errors
///
/// Returns the `ApiError` from the login call; the session is left untouched.
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<User, ApiError> {
    let session = api.login(request).await?;
    storage::save_session(&session);
    let user = session.user.clone();
    api.auth().update(|state| state.sign_in(session));
    Ok(user)
}

/// Create an account and sign straight into it.
///
/// # Errors
///
/// Returns the `ApiError` from the register call.
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<User, ApiError> {
    let session = api.register(request).await?;
    storage::save_session(&session);
    let user = session.user.clone();
    api.auth().update(|state| state.sign_in(session));
    Ok(user)
}

/// Forget the session locally. The API keeps no server-side session.
pub fn logout(auth: RwSignal<AuthState>) {
    teardown(auth);
}

/// Clear both the in-memory and persisted session.
pub fn teardown(auth: RwSignal<AuthState>) {
    storage::clear_session();
    auth.update(AuthState::sign_out);
}

fn remember_user(auth: RwSignal<AuthState>, user: User) {
    storage::save_user(&user);
    auth.update(|state| {
        if state.token.is_some() {
            state.user = Some(user);
        }
    });
}
