use super::*;

#[test]
fn tabs_keep_display_order() {
    let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Appointments", "Profile", "My Services", "Availability"]);
}

#[test]
fn action_class_colors_by_target_status() {
    assert_eq!(action_class(AppointmentStatus::Confirmed), "btn btn-sm btn-success");
    assert_eq!(action_class(AppointmentStatus::Cancelled), "btn btn-sm btn-error");
    assert_eq!(action_class(AppointmentStatus::Completed), "btn btn-sm btn-primary");
}

#[test]
fn availability_rows_survive_leaving_and_reopening_the_tab() {
    let owner = Owner::new();
    owner.with(|| {
        let drafts = DashboardDrafts::new();
        drafts.availability.update(AvailabilityEditor::add_row);
        let first_save = drafts.availability.with_untracked(AvailabilityEditor::validate);
        assert_eq!(first_save.map(|rows| rows.len()), Ok(1));

        // Reopening the tab hands the same signal back in.
        let reopened = drafts.availability;
        reopened.update(|e| {
            e.add_row();
            e.set_day(1, 2);
        });
        let days: Vec<u8> = reopened
            .with_untracked(AvailabilityEditor::validate)
            .map(|rows| rows.iter().map(|r| r.day_of_week).collect())
            .unwrap_or_default();
        assert_eq!(days, vec![1, 2]);
    });
}

#[test]
fn profile_and_service_drafts_are_kept_on_the_page() {
    let owner = Owner::new();
    owner.with(|| {
        let drafts = DashboardDrafts::new();
        drafts.profile.update(|f| f.bio = "Lash artist".to_owned());
        drafts.services.update(|s| s.toggle(3));
        assert_eq!(drafts.profile.with_untracked(|f| f.bio.clone()), "Lash artist");
        assert!(drafts.services.with_untracked(|s| s.contains(3)));
    });
}
