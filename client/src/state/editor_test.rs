use super::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct NameForm {
    name: String,
}

fn form(name: &str) -> NameForm {
    NameForm { name: name.to_owned() }
}

#[test]
fn fresh_editor_creates() {
    let mut editor = Editor::<NameForm, i64>::default();
    assert!(!editor.is_editing());
    assert_eq!(editor.begin_save(), Some(SubmitTarget::Create));
}

#[test]
fn editing_target_turns_submit_into_update() {
    let mut editor = Editor::<NameForm, i64>::default();
    editor.begin_edit(5, form("Brow Wax"));
    assert_eq!(editor.form.name, "Brow Wax");
    assert_eq!(editor.begin_save(), Some(SubmitTarget::Update(5)));
}

#[test]
fn second_save_is_refused_while_saving() {
    let mut editor = Editor::<NameForm, i64>::default();
    assert!(editor.begin_save().is_some());
    assert_eq!(editor.begin_save(), None);
}

#[test]
fn failed_save_keeps_entered_values() {
    let mut editor = Editor::<NameForm, i64>::default();
    editor.begin_edit(2, form("Lash Lift"));
    editor.begin_save();
    editor.save_failed();
    assert_eq!(editor.form, form("Lash Lift"));
    assert_eq!(editor.editing(), Some(2));
    assert!(!editor.saving());
}

#[test]
fn successful_save_clears_form_and_target() {
    let mut editor = Editor::<NameForm, i64>::default();
    editor.begin_edit(2, form("Lash Lift"));
    editor.begin_save();
    editor.save_succeeded();
    assert_eq!(editor.form, NameForm::default());
    assert!(!editor.is_editing());
}

#[test]
fn cancelling_delete_is_idempotent() {
    let mut editor = Editor::<NameForm, i64>::default();
    editor.begin_edit(3, form("Facial"));
    let before = editor.clone();

    editor.request_delete(3);
    for _ in 0..3 {
        editor.cancel_delete();
    }
    assert_eq!(editor, before);
    assert_eq!(editor.confirm_delete(), None);
}

#[test]
fn confirm_delete_returns_target_once() {
    let mut editor = Editor::<NameForm, i64>::default();
    editor.request_delete(9);
    assert_eq!(editor.pending_delete(), Some(9));
    assert_eq!(editor.confirm_delete(), Some(9));
    assert_eq!(editor.confirm_delete(), None);
}

#[test]
fn deleting_the_edited_record_resets_form() {
    let mut editor = Editor::<NameForm, i64>::default();
    editor.begin_edit(4, form("Peel"));
    editor.request_delete(4);
    editor.confirm_delete();
    assert!(!editor.is_editing());
    assert_eq!(editor.form, NameForm::default());
}
