//! Session persistence in `localStorage`.
//!
//! The bearer token and the signed-in user survive reloads under the `token`
//! and `user` keys. Reads and writes are no-ops outside the browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::{AuthSession, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Rebuild a session from raw storage values. Both keys must be present and
/// the user record must parse.
#[must_use]
pub fn decode_session(token: Option<String>, user_json: Option<String>) -> Option<AuthSession> {
    let token = token.filter(|t| !t.trim().is_empty())?;
    let user = serde_json::from_str::<User>(&user_json?).ok()?;
    Some(AuthSession { token, user })
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted session, if any.
#[must_use]
pub fn load_session() -> Option<AuthSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let user = storage.get_item(USER_KEY).ok().flatten();
        decode_session(token, user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_session(session: &AuthSession) {
    save_token(&session.token);
    save_user(&session.user);
}

pub fn save_token(token: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = token;
}

pub fn save_user(user: &User) {
    #[cfg(feature = "hydrate")]
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &json);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = user;
}

pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}
