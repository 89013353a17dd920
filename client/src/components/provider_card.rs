//! Card for one provider in the providers grid and on the home page.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::Provider;
use crate::util::format::{rating, review_count};

#[component]
pub fn ProviderCard(provider: Provider) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let image = config.asset_url(provider.image.as_deref());
    let href = format!("/providers/{}", provider.id);
    let specialties = provider.specialties.clone().filter(|s| !s.trim().is_empty());

    view! {
        <a class="provider-card card" href=href>
            <div class="provider-card__image">
                <img src=image alt=provider.name.clone()/>
            </div>
            <div class="provider-card__body">
                <h3>{provider.name.clone()}</h3>
                {specialties.map(|s| view! { <p class="provider-card__specialties">{s}</p> })}
                <div class="provider-card__rating">
                    <span class="star">"★"</span>
                    <span>{rating(provider.rating)}</span>
                    <span class="provider-card__count">{review_count(provider.total_reviews)}</span>
                </div>
            </div>
        </a>
    }
}
