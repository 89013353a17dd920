use super::*;

#[test]
fn new_rows_default_to_monday_office_hours() {
    let mut editor = AvailabilityEditor::default();
    editor.add_row();
    let row = &editor.rows[0];
    assert_eq!(row.day_of_week, 1);
    assert_eq!(row.start_time, "09:00");
    assert_eq!(row.end_time, "17:00");
    assert!(row.id.is_none());
}

#[test]
fn rows_can_be_edited_and_removed() {
    let mut editor = AvailabilityEditor::default();
    editor.add_row();
    editor.add_row();
    editor.set_day(1, 6);
    editor.set_start(1, "10:00".to_owned());
    editor.set_end(1, "14:00".to_owned());
    editor.remove_row(0);
    assert_eq!(editor.rows.len(), 1);
    assert_eq!(editor.rows[0].day_of_week, 6);
    assert_eq!(editor.rows[0].start_time, "10:00");

    editor.remove_row(5);
    editor.set_day(9, 2);
    assert_eq!(editor.rows.len(), 1);
}

#[test]
fn day_is_clamped_to_saturday() {
    let mut editor = AvailabilityEditor::default();
    editor.add_row();
    editor.set_day(0, 12);
    assert_eq!(editor.rows[0].day_of_week, 6);
}

#[test]
fn validate_rejects_inverted_or_unreadable_times() {
    let mut editor = AvailabilityEditor::default();
    editor.add_row();
    assert_eq!(editor.validate().unwrap().len(), 1);

    editor.set_end(0, "08:00".to_owned());
    assert_eq!(editor.validate(), Err("Each time slot must end after it starts."));

    editor.set_end(0, "late".to_owned());
    assert!(editor.validate().is_err());
}

#[test]
fn service_selection_toggles_membership() {
    let mut selection = ServiceSelection::from_ids([1, 2, 2]);
    assert_eq!(selection.ids(), &[1, 2]);
    selection.toggle(2);
    assert!(!selection.contains(2));
    selection.toggle(5);
    assert_eq!(selection.ids(), &[1, 5]);
}
