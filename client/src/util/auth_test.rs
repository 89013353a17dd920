use super::*;
use crate::net::types::{AuthSession, User};

fn signed_in(role: Role) -> AuthState {
    let mut state = AuthState::default();
    state.sign_in(AuthSession {
        token: "tok".to_owned(),
        user: User { id: 1, name: "Ana".to_owned(), email: String::new(), role },
    });
    state
}

#[test]
fn role_guard_waits_while_restoring() {
    assert_eq!(role_guard_target(&AuthState::restoring(), Role::Admin), None);
}

#[test]
fn role_guard_sends_anonymous_visitors_to_login() {
    assert_eq!(role_guard_target(&AuthState::default(), Role::Provider), Some("/login"));
}

#[test]
fn role_guard_rejects_wrong_role() {
    assert_eq!(role_guard_target(&signed_in(Role::Client), Role::Admin), Some("/login"));
}

#[test]
fn role_guard_admits_matching_role() {
    assert_eq!(role_guard_target(&signed_in(Role::Admin), Role::Admin), None);
    assert_eq!(role_guard_target(&signed_in(Role::Provider), Role::Provider), None);
}

#[test]
fn landing_path_follows_role() {
    assert_eq!(landing_path(Role::Admin), "/admin");
    assert_eq!(landing_path(Role::Provider), "/provider/dashboard");
    assert_eq!(landing_path(Role::Client), "/");
}
