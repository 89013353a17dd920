//! Top navigation bar with role-aware links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Reads the shared `AuthState` to decide between
//! login/register links and the signed-in menu, and links providers and
//! admins to their dashboards.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Dashboard link for roles that have one.
#[must_use]
pub fn dashboard_link(role: Role) -> Option<(&'static str, &'static str)> {
    match role {
        Role::Provider => Some(("/provider/dashboard", "Dashboard")),
        Role::Admin => Some(("/admin", "Admin")),
        Role::Client => None,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        crate::net::session::logout(auth);
        menu_open.set(false);
        navigate("/", NavigateOptions::default());
    };

    let role_link = move || {
        auth.get().role().and_then(dashboard_link).map(|(href, label)| {
            view! { <a class="navbar__link" href=href>{label}</a> }
        })
    };
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    view! {
        <nav class="navbar">
            <div class="container navbar__inner">
                <a class="navbar__brand" href="/">"BeautyBook"</a>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                    <a class="navbar__link" href="/">"Home"</a>
                    <a class="navbar__link" href="/services">"Services"</a>
                    <a class="navbar__link" href="/providers">"Providers"</a>
                    <a class="navbar__link" href="/reviews">"Reviews"</a>
                    <a class="navbar__link" href="/contact">"Contact"</a>
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a class="navbar__link" href="/login">"Login"</a>
                                <a class="btn btn-primary navbar__cta" href="/register">"Sign Up"</a>
                            }
                        }
                    >
                        <a class="navbar__link" href="/appointments">"My Appointments"</a>
                        {role_link}
                        <span class="navbar__user">{user_name}</span>
                        <button class="btn btn-secondary navbar__logout" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
