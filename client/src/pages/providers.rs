//! Providers directory.

use leptos::prelude::*;

use crate::components::list_status::{EmptyState, Spinner};
use crate::components::provider_card::ProviderCard;
use crate::net::api::ApiClient;
use crate::net::types::Provider;
use crate::state::fetch::{ListState, ListView};
use crate::util::load::spawn_list_load;

#[component]
pub fn ProvidersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let providers = RwSignal::new(ListState::<Provider>::default());

    Effect::new(move || {
        let api = api.clone();
        spawn_list_load(providers, async move { api.list_providers().await });
    });

    let grid = move || match providers.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! {
            <EmptyState title="No providers found" message="Check back soon for our beauty professionals"/>
        }
        .into_any(),
        ListView::Items => view! {
            <div class="providers-grid">
                {providers
                    .get()
                    .items
                    .into_iter()
                    .map(|provider| view! { <ProviderCard provider=provider/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="providers-page">
            <div class="page-header">
                <div class="container">
                    <h1>"Our Professionals"</h1>
                    <p>"Meet our talented beauty experts"</p>
                </div>
            </div>
            <div class="container">{grid}</div>
        </div>
    }
}
