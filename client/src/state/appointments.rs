//! Appointment list rules: status filters, valid transitions, and which
//! actions each viewer may take.
//!
//! The buttons a page renders come straight from these functions, so an
//! invalid transition is never offered.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use time::PrimitiveDateTime;

use crate::net::types::{Appointment, AppointmentStatus};
use crate::util::dates;

/// Filter tabs in display order; `None` is "All".
pub const FILTER_TABS: [Option<AppointmentStatus>; 5] = [
    None,
    Some(AppointmentStatus::Pending),
    Some(AppointmentStatus::Confirmed),
    Some(AppointmentStatus::Completed),
    Some(AppointmentStatus::Cancelled),
];

#[must_use]
pub fn status_label(status: AppointmentStatus) -> &'static str {
    match status {
        AppointmentStatus::Pending => "Pending",
        AppointmentStatus::Confirmed => "Confirmed",
        AppointmentStatus::Completed => "Completed",
        AppointmentStatus::Cancelled => "Cancelled",
    }
}

#[must_use]
pub fn filter_label(filter: Option<AppointmentStatus>) -> &'static str {
    filter.map_or("All", status_label)
}

/// Statuses a provider may move an appointment to.
#[must_use]
pub fn provider_actions(status: AppointmentStatus) -> &'static [AppointmentStatus] {
    match status {
        AppointmentStatus::Pending => &[AppointmentStatus::Confirmed, AppointmentStatus::Cancelled],
        AppointmentStatus::Confirmed => &[AppointmentStatus::Completed],
        AppointmentStatus::Completed | AppointmentStatus::Cancelled => &[],
    }
}

/// Button text for a provider transition.
#[must_use]
pub fn action_label(target: AppointmentStatus) -> &'static str {
    match target {
        AppointmentStatus::Confirmed => "Confirm",
        AppointmentStatus::Cancelled => "Cancel",
        AppointmentStatus::Completed => "Complete",
        AppointmentStatus::Pending => "Reopen",
    }
}

/// Actions offered to the client who booked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientAction {
    Cancel,
    LeaveReview,
}

#[must_use]
pub fn client_actions(status: AppointmentStatus) -> &'static [ClientAction] {
    match status {
        AppointmentStatus::Pending => &[ClientAction::Cancel],
        AppointmentStatus::Completed => &[ClientAction::LeaveReview],
        AppointmentStatus::Confirmed | AppointmentStatus::Cancelled => &[],
    }
}

/// A confirmed appointment whose start time has passed but which the
/// provider has not completed yet.
#[must_use]
pub fn awaiting_completion(appointment: &Appointment, now: PrimitiveDateTime) -> bool {
    appointment.status == AppointmentStatus::Confirmed && dates::is_past(&appointment.date, &appointment.time, now)
}
