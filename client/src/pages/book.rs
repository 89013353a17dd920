//! Booking wizard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin view over `state::booking::BookingFlow`. Every event calls a flow
//! transition and executes whatever `BookingCommand`s come back; responses
//! are fed back through the flow so stale ones are dropped there.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::components::list_status::Spinner;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::auth::AuthState;
use crate::state::booking::{BookingCommand, BookingFlow, BookingStep};
use crate::state::fetch::ListView;
use crate::util::dates;
use crate::util::format::{long_date, money, rating};
use crate::util::route::parse_id;

/// Run the fetch commands a transition produced.
fn execute(flow: RwSignal<BookingFlow>, api: &ApiClient, commands: Vec<BookingCommand>) {
    for command in commands {
        let api = api.clone();
        match command {
            BookingCommand::FetchServices { ticket } => leptos::task::spawn_local(async move {
                let result = api.list_services(None).await;
                flow.update(|f| {
                    f.receive_services(ticket, result);
                });
            }),
            BookingCommand::FetchProviders { service_id, ticket } => leptos::task::spawn_local(async move {
                let result = api.providers_for_service(service_id).await;
                flow.update(|f| {
                    f.receive_providers(ticket, result);
                });
            }),
            BookingCommand::FetchSlots { provider_id, date, ticket } => leptos::task::spawn_local(async move {
                let result = api.available_slots(provider_id, &dates::iso(date)).await;
                flow.update(|f| {
                    f.receive_slots(ticket, result);
                });
            }),
            BookingCommand::RedirectToLogin | BookingCommand::Submit(_) => {
                leptos::logging::warn!("booking: unexpected command outside submit");
            }
        }
    }
}

#[component]
pub fn BookPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let service_param = Memo::new(move |_| parse_id(params.read().get("service_id").as_deref()));
    let provider_param = Memo::new(move |_| parse_id(query.read().get("provider").as_deref()));
    let options = config.booking_options();

    let flow = RwSignal::new(BookingFlow::new(
        options,
        service_param.get_untracked(),
        provider_param.get_untracked(),
        dates::today(),
    ));

    {
        let api = api.clone();
        Effect::new(move || {
            let mut fresh = BookingFlow::new(options, service_param.get(), provider_param.get(), dates::today());
            let commands = fresh.start();
            flow.set(fresh);
            execute(flow, &api, commands);
        });
    }

    let on_service = {
        let api = api.clone();
        move |id: i64| {
            if let Some(commands) = flow.try_update(|f| {
                let result = f.select_service(id);
                f.settle(result)
            })
            .flatten()
            {
                execute(flow, &api, commands);
            }
        }
    };

    let on_provider = move |id: i64| {
        flow.update(|f| {
            let result = f.select_provider(id);
            f.settle(result);
        });
    };

    let on_date = {
        let api = api.clone();
        move |value: String| {
            let Some(date) = dates::parse_iso(&value) else {
                flow.update(BookingFlow::clear_date);
                return;
            };
            if let Some(command) = flow.try_update(|f| {
                let result = f.choose_date(date);
                f.settle(result)
            })
            .flatten()
            {
                execute(flow, &api, vec![command]);
            }
        }
    };

    let on_time = move |slot: String| {
        flow.update(|f| {
            let result = f.select_time(&slot);
            f.settle(result);
        });
    };

    let on_submit = {
        let api = api.clone();
        move |_| {
            let authenticated = auth.with_untracked(AuthState::is_authenticated);
            let command = flow
                .try_update(|f| {
                    let result = f.submit(authenticated);
                    f.settle(result)
                })
                .flatten();
            match command {
                Some(BookingCommand::RedirectToLogin) => navigate("/login", NavigateOptions::default()),
                Some(BookingCommand::Submit(booking)) => {
                    let api = api.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        match api.create_appointment(&booking).await {
                            Ok(()) => {
                                flow.update(BookingFlow::submission_succeeded);
                                navigate("/appointments?success=true", NavigateOptions::default());
                            }
                            Err(e) => {
                                let message = e.user_message("Failed to book appointment");
                                flow.update(|f| f.submission_failed(message));
                            }
                        }
                    });
                }
                Some(_) | None => {}
            }
        }
    };

    let progress = move || {
        let current = flow.with(BookingFlow::step);
        let steps = flow.with(BookingFlow::visible_steps);
        let reached = steps.iter().position(|s| *s == current).unwrap_or(steps.len());
        steps
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                view! {
                    <div class="progress-step" class:active=index <= reached>
                        <span class="step-number">{index + 1}</span>
                        <span class="step-label">{step.label()}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let service_step = move || {
        let on_service = on_service.clone();
        match flow.with(|f| f.services.view()) {
            ListView::Loading => view! { <Spinner/> }.into_any(),
            ListView::Empty => view! { <p class="no-options">"No services available"</p> }.into_any(),
            ListView::Items => {
                let chosen = flow.with(|f| f.draft().service_id);
                view! {
                    <div class="booking-step">
                        <h2>"Select a Service"</h2>
                        <div class="options-grid">
                            {flow
                                .with(|f| f.services.items.clone())
                                .into_iter()
                                .map(|service| {
                                    let id = service.id;
                                    let on_service = on_service.clone();
                                    view! {
                                        <div
                                            class="option-card"
                                            class:selected=chosen == Some(id)
                                            on:click=move |_| on_service(id)
                                        >
                                            <h4>{service.name.clone()}</h4>
                                            <p>{format!("{} min", service.duration)}</p>
                                            <span class="price">{money(service.price)}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                }
                .into_any()
            }
        }
    };

    let provider_step = move || {
        let chosen = flow.with(|f| f.draft().provider_id);
        let grid = match flow.with(|f| f.providers.view()) {
            ListView::Loading => view! { <Spinner/> }.into_any(),
            ListView::Empty => {
                view! { <p class="no-options">"No providers offer this service yet"</p> }.into_any()
            }
            ListView::Items => view! {
                <div class="options-grid">
                    {flow
                        .with(|f| f.providers.items.clone())
                        .into_iter()
                        .map(|provider| {
                            let id = provider.id;
                            view! {
                                <div
                                    class="option-card"
                                    class:selected=chosen == Some(id)
                                    on:click=move |_| on_provider(id)
                                >
                                    <h4>{provider.name.clone()}</h4>
                                    <p>{provider.specialties.clone().unwrap_or_default()}</p>
                                    <span class="rating">{format!("★ {}", rating(provider.rating))}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        };
        view! {
            <div class="booking-step">
                <h2>"Select a Provider"</h2>
                <button class="back-btn" on:click=move |_| flow.update(BookingFlow::back)>
                    "← Back to Services"
                </button>
                {grid}
            </div>
        }
    };

    let date_step = move || {
        let on_date = on_date.clone();
        let back_label = if flow.with_untracked(BookingFlow::provider_step_active) {
            "← Back to Providers"
        } else {
            "← Back to Services"
        };
        let min = dates::iso(flow.with_untracked(BookingFlow::min_date));
        let value = move || flow.with(|f| f.draft().date.map(dates::iso).unwrap_or_default());
        let has_date = move || flow.with(|f| f.draft().date.is_some());

        let slots = move || match flow.with(|f| f.slots.view()) {
            ListView::Loading => view! { <Spinner/> }.into_any(),
            ListView::Empty => view! { <p class="no-options">"No available slots for this date"</p> }.into_any(),
            ListView::Items => {
                let chosen_time = flow.with(|f| f.draft().time.clone());
                view! {
                    <div class="slots-grid">
                        {flow
                            .with(|f| f.slots.items.clone())
                            .into_iter()
                            .map(|slot| {
                                let selected = chosen_time.as_deref() == Some(slot.as_str());
                                let value = slot.clone();
                                view! {
                                    <button
                                        class="slot-btn"
                                        class:selected=selected
                                        on:click=move |_| on_time(value.clone())
                                    >
                                        {slot}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }
        };

        view! {
            <div class="booking-step">
                <h2>"Select Date & Time"</h2>
                <button class="back-btn" on:click=move |_| flow.update(BookingFlow::back)>{back_label}</button>
                <div class="date-picker">
                    <label for="booking-date">"Select Date"</label>
                    <input
                        id="booking-date"
                        type="date"
                        min=min
                        prop:value=value
                        on:change=move |ev| on_date(event_target_value(&ev))
                    />
                </div>
                <Show when=has_date>
                    <div class="time-slots">
                        <label>"Available Times"</label>
                        {slots}
                    </div>
                </Show>
            </div>
        }
    };

    let confirm_step = move || {
        let on_submit = on_submit.clone();
        let submitting = move || flow.with(BookingFlow::submitting);
        let error = move || {
            flow.with(|f| f.error().map(str::to_owned))
                .map(|e| view! { <div class="alert alert-error">{e}</div> })
        };
        let summary = move || {
            flow.with(BookingFlow::summary).map(|s| {
                view! {
                    <div class="booking-summary">
                        <div class="summary-item">
                            <span class="label">"Service"</span>
                            <span class="value">{s.service_name}</span>
                        </div>
                        {s.provider_name.map(|name| view! {
                            <div class="summary-item">
                                <span class="label">"Provider"</span>
                                <span class="value">{name}</span>
                            </div>
                        })}
                        <div class="summary-item">
                            <span class="label">"Date"</span>
                            <span class="value">{long_date(s.date)}</span>
                        </div>
                        <div class="summary-item">
                            <span class="label">"Time"</span>
                            <span class="value">{s.time}</span>
                        </div>
                        <div class="summary-item">
                            <span class="label">"Duration"</span>
                            <span class="value">{format!("{} minutes", s.duration)}</span>
                        </div>
                        <div class="summary-item total">
                            <span class="label">"Total"</span>
                            <span class="value">{money(s.price)}</span>
                        </div>
                    </div>
                }
            })
        };
        let notes = flow.with_untracked(|f| f.draft().notes.clone());

        view! {
            <div class="booking-step">
                <h2>"Confirm Booking"</h2>
                <button class="back-btn" on:click=move |_| flow.update(BookingFlow::back)>
                    "← Back to Date & Time"
                </button>
                {error}
                {summary}
                <div class="form-group">
                    <label for="booking-notes">"Additional Notes (Optional)"</label>
                    <textarea
                        id="booking-notes"
                        rows="3"
                        placeholder="Any special requests or notes for your appointment..."
                        prop:value=notes
                        on:input=move |ev| flow.update(|f| f.set_notes(event_target_value(&ev)))
                    ></textarea>
                </div>
                <button class="btn btn-primary btn-block btn-lg" disabled=submitting on:click=on_submit>
                    {move || if submitting() { "Booking..." } else { "Confirm Booking" }}
                </button>
            </div>
        }
    };

    let step = Memo::new(move |_| flow.with(BookingFlow::step));
    // Arms hand over closures so each step tracks the flow in its own scope.
    let content = move || match step.get() {
        BookingStep::SelectService => service_step.clone().into_any(),
        BookingStep::SelectProvider => provider_step.into_any(),
        BookingStep::SelectDateTime => date_step.clone().into_any(),
        BookingStep::Confirm | BookingStep::Submitted => confirm_step.clone().into_any(),
    };

    view! {
        <div class="book-page">
            <div class="page-header">
                <div class="container">
                    <h1>"Book Appointment"</h1>
                    <p>"Select your service and preferred time"</p>
                </div>
            </div>
            <div class="container booking-container">
                <div class="booking-progress">{progress}</div>
                {move || {
                    flow.with(|f| f.problem().map(str::to_owned))
                        .map(|p| view! { <div class="alert alert-error">{p}</div> })
                }}
                <div class="booking-content">{content}</div>
            </div>
        </div>
    }
}
