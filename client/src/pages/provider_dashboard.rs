//! Provider dashboard: appointments, profile, offered services, and hours.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::list_status::{EmptyState, Spinner};
use crate::components::notice_banner::NoticeBanner;
use crate::components::status_badge::StatusBadge;
use crate::net::api::ApiClient;
use crate::net::types::{Appointment, AppointmentStatus, Role, Service};
use crate::state::appointments::{action_label, provider_actions};
use crate::state::auth::AuthState;
use crate::state::fetch::{ListState, ListView};
use crate::state::forms::ProfileForm;
use crate::state::notice::{NOTICE_TTL, NoticeKind, NoticeState, flash};
use crate::state::provider_settings::{AvailabilityEditor, ServiceSelection};
use crate::util::auth::install_role_guard;
use crate::util::format::{DAY_NAMES, api_date, money};
use crate::util::load::spawn_list_load;

#[cfg(test)]
#[path = "provider_dashboard_test.rs"]
mod provider_dashboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Appointments,
    Profile,
    Services,
    Availability,
}

impl DashboardTab {
    pub const ALL: [Self; 4] = [Self::Appointments, Self::Profile, Self::Services, Self::Availability];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Appointments => "Appointments",
            Self::Profile => "Profile",
            Self::Services => "My Services",
            Self::Availability => "Availability",
        }
    }
}

/// Editor state for the write-only tabs. It lives on the page so switching
/// tabs never drops unsaved or already-saved entries.
#[derive(Clone, Copy)]
struct DashboardDrafts {
    profile: RwSignal<ProfileForm>,
    services: RwSignal<ServiceSelection>,
    availability: RwSignal<AvailabilityEditor>,
}

impl DashboardDrafts {
    fn new() -> Self {
        Self {
            profile: RwSignal::new(ProfileForm::default()),
            services: RwSignal::new(ServiceSelection::default()),
            availability: RwSignal::new(AvailabilityEditor::default()),
        }
    }
}

fn action_class(target: AppointmentStatus) -> &'static str {
    match target {
        AppointmentStatus::Confirmed => "btn btn-sm btn-success",
        AppointmentStatus::Cancelled => "btn btn-sm btn-error",
        AppointmentStatus::Completed | AppointmentStatus::Pending => "btn btn-sm btn-primary",
    }
}

#[component]
pub fn ProviderDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_guard(auth, Role::Provider, use_navigate());

    let tab = RwSignal::new(DashboardTab::Appointments);
    let notices = RwSignal::new(NoticeState::default());
    let drafts = DashboardDrafts::new();
    let allowed = Memo::new(move |_| auth.with(|a| a.has_role(Role::Provider)));
    let greeting = move || auth.with(|a| a.user.as_ref().map(|u| format!("Welcome back, {}", u.name)));

    let tabs = move || {
        DashboardTab::ALL
            .into_iter()
            .map(|t| {
                view! {
                    <button class="dashboard-tab" class:active=move || tab.get() == t on:click=move |_| tab.set(t)>
                        {t.label()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let content = move || match tab.get() {
        DashboardTab::Appointments => view! { <AppointmentsTab notices=notices/> }.into_any(),
        DashboardTab::Profile => view! { <ProfileTab notices=notices form=drafts.profile/> }.into_any(),
        DashboardTab::Services => view! { <ServicesTab notices=notices selection=drafts.services/> }.into_any(),
        DashboardTab::Availability => {
            view! { <AvailabilityTab notices=notices editor=drafts.availability/> }.into_any()
        }
    };

    view! {
        <Show when=move || allowed.get() fallback=|| view! { <Spinner/> }>
            <div class="dashboard-page">
                <div class="page-header">
                    <div class="container">
                        <h1>"Provider Dashboard"</h1>
                        <p>{greeting}</p>
                    </div>
                </div>
                <div class="container dashboard-container">
                    <NoticeBanner notices=notices/>
                    <div class="dashboard-tabs">{tabs}</div>
                    <div class="dashboard-content">{content}</div>
                </div>
            </div>
        </Show>
    }
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

#[component]
fn AppointmentsTab(notices: RwSignal<NoticeState>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let appointments = RwSignal::new(ListState::<Appointment>::default());
    let date_filter = RwSignal::new(String::new());

    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            let date = date_filter.get_untracked();
            spawn_list_load(appointments, async move {
                api.provider_appointments(None, Some(date.as_str()).filter(|d| !d.is_empty())).await
            });
        }
    };
    {
        let reload = reload.clone();
        Effect::new(move || {
            date_filter.track();
            reload();
        });
    }

    let update_status = move |id: i64, status: AppointmentStatus| {
        let api = api.clone();
        let reload = reload.clone();
        leptos::task::spawn_local(async move {
            match api.update_appointment_status(id, status).await {
                Ok(()) => {
                    flash(notices, NoticeKind::Success, "Status updated successfully", NOTICE_TTL);
                    reload();
                }
                Err(e) => {
                    flash(notices, NoticeKind::Error, e.user_message("Failed to update status"), NOTICE_TTL);
                }
            }
        });
    };

    let table = move || {
        let update_status = update_status.clone();
        match appointments.with(ListState::view) {
            ListView::Loading => view! { <Spinner/> }.into_any(),
            ListView::Empty => {
                let title = if date_filter.with(String::is_empty) {
                    "No appointments yet"
                } else {
                    "No appointments for this date"
                };
                view! { <EmptyState title=title/> }.into_any()
            }
            ListView::Items => view! {
                <table class="appointments-table">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Service"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {appointments
                            .get()
                            .items
                            .into_iter()
                            .map(|apt| {
                                let id = apt.id;
                                let actions = provider_actions(apt.status)
                                    .iter()
                                    .map(|&target| {
                                        let update_status = update_status.clone();
                                        view! {
                                            <button class=action_class(target) on:click=move |_| update_status(id, target)>
                                                {action_label(target)}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>();
                                view! {
                                    <tr>
                                        <td>
                                            <strong>{apt.client_name.clone().unwrap_or_default()}</strong>
                                            <br/>
                                            <small>{apt.client_email.clone().unwrap_or_default()}</small>
                                        </td>
                                        <td>{apt.service_name.clone().unwrap_or_default()}</td>
                                        <td>{api_date(&apt.date)}</td>
                                        <td>{apt.time.clone()}</td>
                                        <td><StatusBadge status=apt.status/></td>
                                        <td class="actions">{actions}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        }
    };

    view! {
        <div class="tab-content">
            <div class="tab-header">
                <h2>"Appointments"</h2>
                <input
                    type="date"
                    class="date-filter"
                    prop:value=move || date_filter.get()
                    on:change=move |ev| date_filter.set(event_target_value(&ev))
                />
            </div>
            {table}
        </div>
    }
}

// =============================================================================
// PROFILE
// =============================================================================

#[component]
fn ProfileTab(notices: RwSignal<NoticeState>, form: RwSignal<ProfileForm>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let saving = RwSignal::new(false);

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let profile = form.with_untracked(ProfileForm::to_profile);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.update_provider_profile(&profile).await {
                Ok(()) => flash(notices, NoticeKind::Success, "Profile updated successfully", NOTICE_TTL),
                Err(e) => flash(notices, NoticeKind::Error, e.user_message("Failed to update profile"), NOTICE_TTL),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="tab-content">
            <h2>"Edit Profile"</h2>
            <form class="profile-form" on:submit=save>
                <div class="form-group">
                    <label for="profile-bio">"Bio"</label>
                    <textarea
                        id="profile-bio"
                        rows="4"
                        placeholder="Tell clients about yourself..."
                        prop:value=move || form.with(|f| f.bio.clone())
                        on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <label for="profile-specialties">"Specialties"</label>
                    <input
                        id="profile-specialties"
                        type="text"
                        placeholder="e.g., Hair Coloring, Balayage, Bridal Makeup"
                        prop:value=move || form.with(|f| f.specialties.clone())
                        on:input=move |ev| form.update(|f| f.specialties = event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save Profile" }}
                </button>
            </form>
        </div>
    }
}

// =============================================================================
// SERVICES
// =============================================================================

#[component]
fn ServicesTab(notices: RwSignal<NoticeState>, selection: RwSignal<ServiceSelection>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let services = RwSignal::new(ListState::<Service>::default());
    let saving = RwSignal::new(false);

    {
        let api = api.clone();
        Effect::new(move || {
            let api = api.clone();
            spawn_list_load(services, async move { api.list_services(None).await });
        });
    }

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let ids = selection.with_untracked(|s| s.ids().to_vec());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.set_provider_services(&ids).await {
                Ok(()) => flash(notices, NoticeKind::Success, "Services updated successfully", NOTICE_TTL),
                Err(e) => flash(notices, NoticeKind::Error, e.user_message("Failed to update services"), NOTICE_TTL),
            }
            saving.set(false);
        });
    };

    let checklist = move || match services.with(ListState::view) {
        ListView::Loading => view! { <Spinner/> }.into_any(),
        ListView::Empty => view! { <EmptyState title="No services available"/> }.into_any(),
        ListView::Items => view! {
            <div class="services-checklist">
                {services
                    .get()
                    .items
                    .into_iter()
                    .map(|service| {
                        let id = service.id;
                        view! {
                            <label class="service-checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.with(|s| s.contains(id))
                                    on:change=move |_| selection.update(|s| s.toggle(id))
                                />
                                <span class="service-checkbox__name">{service.name.clone()}</span>
                                <span class="service-checkbox__price">{money(service.price)}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="tab-content">
            <h2>"My Services"</h2>
            <p class="tab-description">"Select the services you offer"</p>
            {checklist}
            <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                {move || if saving.get() { "Saving..." } else { "Save Services" }}
            </button>
        </div>
    }
}

// =============================================================================
// AVAILABILITY
// =============================================================================

#[component]
fn AvailabilityTab(notices: RwSignal<NoticeState>, editor: RwSignal<AvailabilityEditor>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let saving = RwSignal::new(false);

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let rows = match editor.with_untracked(AvailabilityEditor::validate) {
            Ok(rows) => rows,
            Err(message) => {
                flash(notices, NoticeKind::Error, message, NOTICE_TTL);
                return;
            }
        };
        saving.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.set_provider_availability(&rows).await {
                Ok(()) => flash(notices, NoticeKind::Success, "Availability updated successfully", NOTICE_TTL),
                Err(e) => {
                    flash(notices, NoticeKind::Error, e.user_message("Failed to update availability"), NOTICE_TTL);
                }
            }
            saving.set(false);
        });
    };

    let rows = move || {
        editor
            .get()
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                let day = slot.day_of_week;
                view! {
                    <div class="availability-row">
                        <select on:change=move |ev| {
                            if let Ok(day) = event_target_value(&ev).parse::<u8>() {
                                editor.update(|e| e.set_day(index, day));
                            }
                        }>
                            {DAY_NAMES
                                .iter()
                                .zip(0u8..)
                                .map(|(name, value)| {
                                    view! { <option value=value.to_string() selected=value == day>{*name}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <input
                            type="time"
                            prop:value=slot.start_time.clone()
                            on:change=move |ev| editor.update(|e| e.set_start(index, event_target_value(&ev)))
                        />
                        <span>"to"</span>
                        <input
                            type="time"
                            prop:value=slot.end_time.clone()
                            on:change=move |ev| editor.update(|e| e.set_end(index, event_target_value(&ev)))
                        />
                        <button class="btn btn-sm btn-error" on:click=move |_| editor.update(|e| e.remove_row(index))>
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="tab-content">
            <h2>"Working Hours"</h2>
            <p class="tab-description">"Set your availability for each day"</p>
            <div class="availability-list">{rows}</div>
            <button class="btn btn-secondary add-slot-btn" on:click=move |_| editor.update(AvailabilityEditor::add_row)>
                "+ Add Time Slot"
            </button>
            <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                {move || if saving.get() { "Saving..." } else { "Save Availability" }}
            </button>
        </div>
    }
}
