//! Provider profile: bio, services with booking links, reviews, hours.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::list_status::{EmptyState, Spinner};
use crate::components::review_card::ReviewCard;
use crate::components::stars::Stars;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{Provider, Review};
use crate::state::fetch::{ItemState, ListState, ListView};
use crate::util::format::{day_name, money, rating, review_count, short_time, whole_stars};
use crate::util::load::spawn_list_load;
use crate::util::route::parse_id;

#[component]
pub fn ProviderDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let provider = RwSignal::new(ItemState::<Provider>::Loading);
    let reviews = RwSignal::new(ListState::<Review>::default());

    let provider_id = Memo::new(move |_| parse_id(params.read().get("id").as_deref()));

    Effect::new(move || {
        let Some(id) = provider_id.get() else {
            provider.set(ItemState::Missing);
            return;
        };
        provider.set(ItemState::Loading);
        let api_provider = api.clone();
        leptos::task::spawn_local(async move {
            let result = api_provider.get_provider(id).await;
            if provider_id.get_untracked() == Some(id) {
                provider.set(ItemState::from_result(result));
            }
        });
        let api_reviews = api.clone();
        spawn_list_load(reviews, async move { api_reviews.provider_reviews(id, 1).await.map(|page| page.reviews) });
    });

    move || match provider.get() {
        ItemState::Loading => view! { <Spinner/> }.into_any(),
        ItemState::Missing => view! {
            <div class="container">
                <EmptyState title="Provider not found">
                    <a href="/providers" class="btn btn-primary">"Back to providers"</a>
                </EmptyState>
            </div>
        }
        .into_any(),
        ItemState::Found(found) => view! { <ProviderProfileView provider=found reviews=reviews/> }.into_any(),
    }
}

#[component]
fn ProviderProfileView(provider: Provider, reviews: RwSignal<ListState<Review>>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let id = provider.id;
    let image = config.asset_url(provider.image.as_deref());
    let specialties = provider.specialties.clone().filter(|s| !s.trim().is_empty());
    let bio = provider.bio.clone().filter(|b| !b.trim().is_empty());

    let services = provider
        .services
        .iter()
        .map(|service| {
            let href = format!("/book/{}?provider={id}", service.id);
            view! {
                <div class="provider-service">
                    <div>
                        <h4>{service.name.clone()}</h4>
                        <span class="service-duration">{format!("{} min", service.duration)}</span>
                    </div>
                    <div class="provider-service__book">
                        <span class="service-price">{money(service.price)}</span>
                        <a href=href class="btn btn-sm btn-primary">"Book"</a>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let hours = provider
        .availability
        .iter()
        .map(|slot| {
            view! {
                <li class="hours-row">
                    <span>{day_name(slot.day_of_week)}</span>
                    <span>{format!("{} - {}", short_time(&slot.start_time), short_time(&slot.end_time))}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let working_hours = (!hours.is_empty()).then(|| {
        view! {
            <div class="card sidebar-card">
                <h3>"Working Hours"</h3>
                <ul class="hours-list">{hours}</ul>
            </div>
        }
    });

    let contact = (provider.email.is_some() || provider.phone.is_some()).then(|| {
        let email = provider.email.clone();
        let phone = provider.phone.clone();
        view! {
            <div class="card sidebar-card">
                <h3>"Contact"</h3>
                {email.map(|e| view! { <p>"📧 " {e}</p> })}
                {phone.map(|p| view! { <p>"📞 " {p}</p> })}
            </div>
        }
    });

    let review_list = move || match reviews.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <p class="muted">"No reviews yet"</p> }.into_any(),
        ListView::Items => reviews
            .get()
            .items
            .into_iter()
            .map(|review| view! { <ReviewCard review=review/> })
            .collect::<Vec<_>>()
            .into_any(),
    };

    view! {
        <div class="provider-detail">
            <div class="provider-hero">
                <div class="container provider-hero__inner">
                    <img class="provider-hero__image" src=image alt=provider.name.clone()/>
                    <div class="provider-hero__info">
                        <h1>{provider.name.clone()}</h1>
                        {specialties.map(|s| view! { <p class="provider-hero__specialties">{s}</p> })}
                        <div class="provider-hero__rating">
                            <Stars rating=whole_stars(provider.rating)/>
                            <span>{rating(provider.rating)}</span>
                            <span class="muted">{review_count(provider.total_reviews)}</span>
                        </div>
                    </div>
                </div>
            </div>
            <div class="container provider-detail__body">
                <div class="provider-detail__main">
                    {bio.map(|b| view! {
                        <section class="card">
                            <h2>"About"</h2>
                            <p>{b}</p>
                        </section>
                    })}
                    <section class="card">
                        <h2>"Services"</h2>
                        {if services.is_empty() {
                            view! { <p class="muted">"No services listed"</p> }.into_any()
                        } else {
                            services.into_any()
                        }}
                    </section>
                    <section class="card">
                        <h2>"Reviews"</h2>
                        {review_list}
                    </section>
                </div>
                <aside class="provider-detail__sidebar">
                    <div class="card sidebar-card">
                        <a href=format!("/book?provider={id}") class="btn btn-primary btn-block">"Book Now"</a>
                    </div>
                    {working_hours}
                    {contact}
                </aside>
            </div>
        </div>
    }
}
