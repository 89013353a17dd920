//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::session;
use crate::state::forms::LoginForm;
use crate::util::auth::landing_path;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(LoginForm::validate) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(&api, &request).await {
                Ok(user) => navigate(landing_path(user.role), NavigateOptions::default()),
                Err(e) => {
                    error.set(Some(e.user_message("Login failed. Please check your credentials.")));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your bookings"</p>
                {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Don't have an account? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
