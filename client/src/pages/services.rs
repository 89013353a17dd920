//! Services catalog with server-side category filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each chip change re-fetches `/services?category=`. The chip set comes
//! from the unfiltered listing so it never shrinks to the active filter.
//! Selecting a service reveals a booking call-to-action.

use leptos::prelude::*;

use crate::components::list_status::{EmptyState, Spinner};
use crate::net::api::ApiClient;
use crate::net::types::Service;
use crate::state::catalog::{CatalogSelection, book_label, categories};
use crate::state::fetch::{ListState, ListView};
use crate::util::format::money;
use crate::util::load::spawn_list_load;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let services = RwSignal::new(ListState::<Service>::default());
    let selection = RwSignal::new(CatalogSelection::default());
    let chips = RwSignal::new(categories(&[]));

    let category = Memo::new(move |_| selection.with(|s| s.category.clone()));

    Effect::new(move || {
        let filter = category.get();
        let api = api.clone();
        spawn_list_load(services, async move { api.list_services(filter.as_deref()).await });
    });

    // Refresh chips from unfiltered results only.
    Effect::new(move || {
        if category.get().is_some() {
            return;
        }
        let state = services.get();
        if !state.loading && !state.items.is_empty() {
            chips.set(categories(&state.items));
        }
    });

    let chip_bar = move || {
        let active = category.get();
        let all_active = active.is_none();
        let chip_buttons = chips
            .get()
            .into_iter()
            .map(|chip| {
                let is_active = active.as_deref() == Some(chip.as_str());
                let value = chip.clone();
                view! {
                    <button
                        class="filter-btn"
                        class:active=is_active
                        on:click=move |_| {
                            let value = value.clone();
                            selection.update(|s| {
                                s.select_category(Some(value));
                            });
                        }
                    >
                        {chip}
                    </button>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="filters">
                <button
                    class="filter-btn"
                    class:active=all_active
                    on:click=move |_| selection.update(|s| {
                        s.select_category(None);
                    })
                >
                    "All"
                </button>
                {chip_buttons}
            </div>
        }
    };

    let service_list = move || match services.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! {
            <EmptyState title="Coming Soon" message="Services for this category will be available soon"/>
        }
        .into_any(),
        ListView::Items => {
            let selected_id = selection.with(|s| s.service_id);
            view! {
                <div class="services-list">
                    {services
                        .get()
                        .items
                        .into_iter()
                        .map(|service| {
                            let id = service.id;
                            let description = service.description.clone().filter(|d| !d.trim().is_empty());
                            view! {
                                <div
                                    class="service-item"
                                    class:selected=selected_id == Some(id)
                                    on:click=move |_| selection.update(|s| s.toggle_service(id))
                                >
                                    <div class="service-info">
                                        <h3>{service.name.clone()}</h3>
                                        {description.map(|d| view! { <p class="service-description">{d}</p> })}
                                        <span class="service-duration">{format!("{} min", service.duration)}</span>
                                    </div>
                                    <div class="service-price">{money(service.price)}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
    };

    let booking_action = move || {
        let selected = services.with(|list| selection.with(|s| s.selected(&list.items).cloned()));
        selected.map(|service| {
            view! {
                <div class="booking-action">
                    <a href=format!("/book/{}", service.id) class="btn btn-primary btn-lg">
                        {book_label(&service)}
                    </a>
                </div>
            }
        })
    };

    view! {
        <div class="services-page">
            <div class="page-header">
                <div class="container">
                    <h1>"Our Services"</h1>
                    <p>"Browse our wide range of beauty services"</p>
                </div>
            </div>
            <div class="container">
                {chip_bar}
                {service_list}
                {booking_action}
            </div>
        </div>
    }
}
