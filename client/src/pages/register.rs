//! Client account registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::session;
use crate::state::forms::RegisterForm;
use crate::util::auth::landing_path;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match form.with_untracked(RegisterForm::validate) {
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
            match session::register(&api, &request).await {
                Ok(user) => navigate(landing_path(user.role), NavigateOptions::default()),
                Err(e) => {
                    error.set(Some(e.user_message("Registration failed. Please try again.")));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Book treatments in a few clicks"</p>
                {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}
                <form class="auth-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="register-name">"Full Name"</label>
                        <input
                            id="register-name"
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">"Email"</label>
                        <input
                            id="register-email"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-phone">"Phone (optional)"</label>
                        <input
                            id="register-phone"
                            type="tel"
                            autocomplete="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="register-password">"Password"</label>
                            <input
                                id="register-password"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="register-confirm">"Confirm Password"</label>
                            <input
                                id="register-confirm"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.confirm_password.clone())
                                on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <button class="btn btn-primary btn-block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Already have an account? " <a href="/login">"Login"</a></p>
            </div>
        </div>
    }
}
