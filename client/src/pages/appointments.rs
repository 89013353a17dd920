//! Client appointment list with status filter, cancel, and review actions.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_status::{EmptyState, Spinner};
use crate::components::notice_banner::NoticeBanner;
use crate::components::stars::StarPicker;
use crate::components::status_badge::StatusBadge;
use crate::net::api::ApiClient;
use crate::net::types::{Appointment, AppointmentStatus};
use crate::state::appointments::{ClientAction, FILTER_TABS, awaiting_completion, client_actions, filter_label};
use crate::state::auth::AuthState;
use crate::state::fetch::{ListState, ListView};
use crate::state::forms::ReviewForm;
use crate::state::notice::{BOOKING_NOTICE_TTL, NoticeKind, NoticeState, flash};
use crate::util::dates;
use crate::util::format::{api_date, money};
use crate::util::load::spawn_list_load;
use crate::util::route::is_success_flag;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();

    let filter = RwSignal::new(None::<AppointmentStatus>);
    let appointments = RwSignal::new(ListState::<Appointment>::default());
    let notices = RwSignal::new(NoticeState::default());
    let pending_cancel = RwSignal::new(None::<i64>);
    let review_target = RwSignal::new(None::<Appointment>);

    let authenticated = Memo::new(move |_| auth.with(AuthState::is_authenticated));
    let restoring = Memo::new(move |_| auth.with(|a| a.loading));
    let reload = {
        let api = api.clone();
        move || {
            let status = filter.get_untracked();
            let api = api.clone();
            spawn_list_load(appointments, async move { api.my_appointments(status).await });
        }
    };

    Effect::new(move || {
        if is_success_flag(query.read().get("success").as_deref()) {
            flash(notices, NoticeKind::Success, "Appointment booked successfully!", BOOKING_NOTICE_TTL);
        }
    });

    {
        let reload = reload.clone();
        Effect::new(move || {
            filter.track();
            if authenticated.get() {
                reload();
            }
        });
    }

    let on_confirm_cancel = {
        let api = api.clone();
        let reload = reload.clone();
        Callback::new(move |()| {
            let Some(id) = pending_cancel.get_untracked() else {
                return;
            };
            pending_cancel.set(None);
            let api = api.clone();
            let reload = reload.clone();
            leptos::task::spawn_local(async move {
                match api.cancel_appointment(id).await {
                    Ok(()) => reload(),
                    Err(e) => {
                        leptos::logging::warn!("cancel appointment {id} failed: {e}");
                        let message = e.user_message("Failed to cancel appointment");
                        flash(notices, NoticeKind::Error, message, BOOKING_NOTICE_TTL);
                    }
                }
            });
        })
    };

    let tabs = move || {
        let active = filter.get();
        FILTER_TABS
            .into_iter()
            .map(|tab| {
                view! {
                    <button class="filter-tab" class:active=active == tab on:click=move |_| filter.set(tab)>
                        {filter_label(tab)}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let list = move || match appointments.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! {
            <EmptyState title="No appointments found" message="You haven't booked any appointments yet">
                <a href="/services" class="btn btn-primary">"Browse Services"</a>
            </EmptyState>
        }
        .into_any(),
        ListView::Items => {
            let now = dates::now();
            view! {
                <div class="appointments-list">
                    {appointments
                        .get()
                        .items
                        .into_iter()
                        .map(|appointment| {
                            let awaiting = awaiting_completion(&appointment, now);
                            view! {
                                <AppointmentCard
                                    appointment=appointment
                                    awaiting=awaiting
                                    pending_cancel=pending_cancel
                                    review_target=review_target
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any()
        }
    };

    let signed_in = move || {
        view! {
            <div class="appointments-page">
                <div class="page-header">
                    <div class="container">
                        <h1>"My Appointments"</h1>
                        <p>"View and manage your bookings"</p>
                    </div>
                </div>
                <div class="container">
                    <NoticeBanner notices=notices/>
                    <div class="appointments-controls">
                        <div class="filter-tabs">{tabs}</div>
                        <a href="/services" class="btn btn-primary">"Book New Appointment"</a>
                    </div>
                    {list}
                </div>
                <Show when=move || pending_cancel.get().is_some()>
                    <ConfirmDialog
                        message="Are you sure you want to cancel this appointment?"
                        confirm_label="Cancel Appointment"
                        on_confirm=on_confirm_cancel
                        on_cancel=Callback::new(move |()| pending_cancel.set(None))
                    />
                </Show>
                {move || review_target.get().map(|target| view! {
                    <ReviewModal appointment=target review_target=review_target notices=notices/>
                })}
            </div>
        }
    };

    move || {
        if restoring.get() {
            view! { <Spinner/> }.into_any()
        } else if authenticated.get() {
            signed_in.into_any()
        } else {
            view! {
                <div class="appointments-page">
                    <div class="container">
                        <EmptyState title="Please login to view your appointments">
                            <a href="/login" class="btn btn-primary">"Login"</a>
                        </EmptyState>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn AppointmentCard(
    appointment: Appointment,
    awaiting: bool,
    pending_cancel: RwSignal<Option<i64>>,
    review_target: RwSignal<Option<Appointment>>,
) -> impl IntoView {
    let id = appointment.id;
    let service = appointment.service_name.clone().unwrap_or_else(|| "Appointment".to_owned());
    let provider = appointment.provider_name.clone().map(|name| format!("with {name}"));
    let price = appointment.price.map(money);
    let actions = client_actions(appointment.status)
        .iter()
        .map(|action| {
            let target = appointment.clone();
            match action {
                ClientAction::Cancel => view! {
                    <button class="btn btn-secondary btn-sm" on:click=move |_| pending_cancel.set(Some(id))>
                        "Cancel"
                    </button>
                }
                .into_any(),
                ClientAction::LeaveReview => view! {
                    <button
                        class="btn btn-primary btn-sm"
                        on:click=move |_| review_target.set(Some(target.clone()))
                    >
                        "Leave Review"
                    </button>
                }
                .into_any(),
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="appointment-card card">
            <div class="appointment-main">
                <div class="appointment-service">
                    <h3>{service}</h3>
                    {provider.map(|p| view! { <p class="provider-name">{p}</p> })}
                </div>
                <div class="appointment-datetime">
                    <div class="date">{api_date(&appointment.date)}</div>
                    <div class="time">{appointment.time.clone()}</div>
                </div>
                <div class="appointment-details">
                    <span class="duration">{format!("{} min", appointment.duration)}</span>
                    {price.map(|p| view! { <span class="price">{p}</span> })}
                </div>
                <div class="appointment-status">
                    <StatusBadge status=appointment.status/>
                </div>
            </div>
            <div class="appointment-actions">
                {actions}
                {awaiting.then(|| view! { <span class="past-note">"Awaiting completion"</span> })}
            </div>
        </div>
    }
}

#[component]
fn ReviewModal(
    appointment: Appointment,
    review_target: RwSignal<Option<Appointment>>,
    notices: RwSignal<NoticeState>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let rating = RwSignal::new(ReviewForm::default().rating);
    let comment = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let provider_id = appointment.provider_id;
    let appointment_id = appointment.id;
    let provider = appointment.provider_name.clone().unwrap_or_else(|| "your provider".to_owned());

    let close = move || review_target.set(None);

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let form = ReviewForm { rating: rating.get_untracked(), comment: comment.get_untracked() };
        let review = match form.validate(provider_id, Some(appointment_id)) {
            Ok(review) => review,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_review(&review).await {
                Ok(()) => {
                    close();
                    flash(notices, NoticeKind::Success, "Review submitted successfully!", BOOKING_NOTICE_TTL);
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e.user_message("Failed to submit review")));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog modal" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3>"Leave a Review"</h3>
                <p>{format!("How was your experience with {provider}?")}</p>
                {move || error.get().map(|e| view! { <div class="alert alert-error">{e}</div> })}
                <div class="rating-input">
                    <label>"Rating"</label>
                    <StarPicker value=rating/>
                </div>
                <div class="form-group">
                    <label for="review-comment">"Comment"</label>
                    <textarea
                        id="review-comment"
                        rows="4"
                        placeholder="Share your experience..."
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn-secondary" on:click=move |_| close()>"Cancel"</button>
                    <button class="btn btn-primary" disabled=move || saving.get() on:click=submit>
                        {move || if saving.get() { "Submitting..." } else { "Submit Review" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
