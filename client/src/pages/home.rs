//! Landing page: hero, feature blurbs, popular services, top providers.

use leptos::prelude::*;

use crate::components::list_status::{EmptyState, Spinner};
use crate::components::provider_card::ProviderCard;
use crate::components::service_card::ServiceCard;
use crate::net::api::ApiClient;
use crate::net::types::{Provider, Service};
use crate::state::fetch::{ListState, ListView};
use crate::util::load::spawn_list_load;

pub const FEATURED_SERVICES: usize = 6;
pub const FEATURED_PROVIDERS: usize = 4;

const FEATURES: [(&str, &str, &str); 4] = [
    ("📅", "Easy Booking", "Book appointments online 24/7 with real-time availability"),
    ("⭐", "Verified Reviews", "Read honest reviews from real customers"),
    ("💇", "Top Professionals", "Access to skilled and experienced beauty providers"),
    ("🔒", "Secure & Safe", "Your information is always protected"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let services = RwSignal::new(ListState::<Service>::default());
    let providers = RwSignal::new(ListState::<Provider>::default());

    Effect::new(move || {
        let api_services = api.clone();
        spawn_list_load(services, async move { api_services.list_services(None).await });
        let api_providers = api.clone();
        spawn_list_load(providers, async move { api_providers.list_providers().await });
    });

    let service_grid = move || match services.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <EmptyState title="No services yet"/> }.into_any(),
        ListView::Items => view! {
            <div class="services-grid">
                {services
                    .get()
                    .items
                    .into_iter()
                    .take(FEATURED_SERVICES)
                    .map(|service| view! { <ServiceCard service=service/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    let provider_grid = move || match providers.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <EmptyState title="No providers yet"/> }.into_any(),
        ListView::Items => view! {
            <div class="providers-grid">
                {providers
                    .get()
                    .items
                    .into_iter()
                    .take(FEATURED_PROVIDERS)
                    .map(|provider| view! { <ProviderCard provider=provider/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="home">
            <section class="hero">
                <div class="container hero-content">
                    <h1>"Book Your Beauty Appointment Today"</h1>
                    <p>"You deserve to feel gorgeous and become the best version of yourself!"</p>
                    <div class="hero-buttons">
                        <a href="/services" class="btn btn-primary btn-lg">"Browse Services"</a>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="container features-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, blurb)| {
                            view! {
                                <div class="feature-item">
                                    <div class="feature-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="section services-section">
                <div class="container">
                    <div class="section-header">
                        <h2>"Popular Services"</h2>
                        <a href="/services" class="view-all">"View All →"</a>
                    </div>
                    {service_grid}
                </div>
            </section>

            <section class="section providers-section">
                <div class="container">
                    <div class="section-header">
                        <h2>"Top Rated Providers"</h2>
                        <a href="/providers" class="view-all">"View All →"</a>
                    </div>
                    {provider_grid}
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <h2>"Are You a Beauty Professional?"</h2>
                    <p>"Join our platform and reach more clients today"</p>
                    <a href="/register" class="btn btn-primary btn-lg">"Get Started"</a>
                </div>
            </section>
        </div>
    }
}
