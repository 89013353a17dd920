//! Colored badge for an appointment status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::AppointmentStatus;

#[must_use]
pub fn badge_class(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "badge badge-warning",
        AppointmentStatus::Confirmed => "badge badge-success",
        AppointmentStatus::Completed => "badge badge-info",
        AppointmentStatus::Cancelled => "badge badge-error",
    }
}

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.as_str()}</span> }
}
