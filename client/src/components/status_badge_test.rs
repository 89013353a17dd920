use super::*;

#[test]
fn badge_class_per_status() {
    assert_eq!(badge_class(AppointmentStatus::Pending), "badge badge-warning");
    assert_eq!(badge_class(AppointmentStatus::Confirmed), "badge badge-success");
    assert_eq!(badge_class(AppointmentStatus::Completed), "badge badge-info");
    assert_eq!(badge_class(AppointmentStatus::Cancelled), "badge badge-error");
}
