//! BeautyBook root: HTML shell, shared contexts, and the route table.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::config::{ClientConfig, META_NAME};
use crate::net::{api::ApiClient, session};
use crate::pages::{
    admin::AdminPage, appointments::AppointmentsPage, book::BookPage, contact::ContactPage, home::HomePage,
    login::LoginPage, provider_dashboard::ProviderDashboardPage, provider_detail::ProviderDetailPage,
    providers::ProvidersPage, register::RegisterPage, reviews::ReviewsPage, services::ServicesPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The host's `ClientConfig` context is serialized into a meta tag so the
/// hydrated app starts from the same settings.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=config.to_meta_content()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the auth session, and the API client, then sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    let auth = RwSignal::new(AuthState::restoring());
    let api = ApiClient::new(&config.api_base_url, auth);

    provide_context(config);
    provide_context(auth);
    provide_context(api.clone());

    Effect::new(move || session::restore(&api));

    view! {
        <Stylesheet id="leptos" href="/pkg/beautybook.css"/>
        <Title text="BeautyBook"/>

        <Router>
            <Navbar/>
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("book") view=BookPage/>
                    <Route path=(StaticSegment("book"), ParamSegment("service_id")) view=BookPage/>
                    <Route path=StaticSegment("providers") view=ProvidersPage/>
                    <Route path=(StaticSegment("providers"), ParamSegment("id")) view=ProviderDetailPage/>
                    <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                    <Route path=StaticSegment("reviews") view=ReviewsPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=(StaticSegment("provider"), StaticSegment("dashboard")) view=ProviderDashboardPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container empty-state">
            <h3>"Page not found"</h3>
            <a href="/" class="btn btn-primary">"Back to home"</a>
        </div>
    }
}
