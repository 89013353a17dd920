//! Create/edit/delete form state shared by the management tabs.
//!
//! DESIGN
//! ======
//! One form per entity serves both create and edit. `editing` holds the id of
//! the record being edited; `None` means the next submit creates. Deletes are
//! two-phase: `request_delete` arms a confirmation, `confirm_delete` hands the
//! id back for the API call, and `cancel_delete` disarms it without touching
//! anything else.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// What a form submission should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTarget<Id> {
    Create,
    Update(Id),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Editor<F, Id> {
    pub form: F,
    editing: Option<Id>,
    saving: bool,
    pending_delete: Option<Id>,
}

impl<F: Default, Id> Default for Editor<F, Id> {
    fn default() -> Self {
        Self { form: F::default(), editing: None, saving: false, pending_delete: None }
    }
}

impl<F: Default, Id: Copy + PartialEq> Editor<F, Id> {
    /// Load a record into the form for editing.
    pub fn begin_edit(&mut self, id: Id, form: F) {
        self.form = form;
        self.editing = Some(id);
    }

    /// Empty the form and return to create mode.
    pub fn reset(&mut self) {
        self.form = F::default();
        self.editing = None;
        self.saving = false;
    }

    #[must_use]
    pub fn editing(&self) -> Option<Id> {
        self.editing
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn saving(&self) -> bool {
        self.saving
    }

    /// Start a save. Returns `None` while another save is in flight.
    pub fn begin_save(&mut self) -> Option<SubmitTarget<Id>> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(self.editing.map_or(SubmitTarget::Create, SubmitTarget::Update))
    }

    /// Keep the entered values so the user can correct them.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }

    pub fn save_succeeded(&mut self) {
        self.reset();
    }

    pub fn request_delete(&mut self, id: Id) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<Id> {
        self.pending_delete
    }

    /// Consume the armed confirmation.
    pub fn confirm_delete(&mut self) -> Option<Id> {
        let id = self.pending_delete.take()?;
        if self.editing == Some(id) {
            self.reset();
        }
        Some(id)
    }
}
