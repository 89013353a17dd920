//! Card for one service in catalog grids and the booking picker.

use leptos::prelude::*;

use crate::net::types::Service;
use crate::util::format::money;

/// A service summary. With `on_select` the card is a button; otherwise it
/// links straight to booking.
#[component]
pub fn ServiceCard(
    service: Service,
    #[prop(into, default = false.into())] selected: Signal<bool>,
    #[prop(optional)] on_select: Option<Callback<i64>>,
) -> impl IntoView {
    let id = service.id;
    let description = service.description.clone().filter(|d| !d.trim().is_empty());
    let category = service.category.clone().filter(|c| !c.trim().is_empty());
    let body = view! {
        {category.map(|c| view! { <span class="service-card__category">{c}</span> })}
        <h3 class="service-card__name">{service.name.clone()}</h3>
        {description.map(|d| view! { <p class="service-card__description">{d}</p> })}
        <div class="service-card__meta">
            <span class="service-card__duration">{format!("{} min", service.duration)}</span>
            <span class="service-card__price">{money(service.price)}</span>
        </div>
    };

    match on_select {
        Some(on_select) => view! {
            <button
                type="button"
                class="service-card card"
                class:service-card--selected=move || selected.get()
                on:click=move |_| on_select.run(id)
            >
                {body}
            </button>
        }
        .into_any(),
        None => view! {
            <a class="service-card card" href=format!("/book/{id}")>
                {body}
            </a>
        }
        .into_any(),
    }
}
