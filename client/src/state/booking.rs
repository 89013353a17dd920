//! Booking wizard state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::book` owns one `BookingFlow` in a signal. User events call the
//! transition methods below; any network work a transition needs comes back
//! as `BookingCommand`s which the page executes and feeds back through the
//! `receive_*` methods.
//!
//! DESIGN
//! ======
//! Steps run `SelectService -> SelectProvider -> SelectDateTime -> Confirm ->
//! Submitted`. The provider step only exists when enabled in configuration
//! and no provider was preselected through the URL; otherwise bookings go to
//! the preselected or default provider.
//!
//! Choices invalidate everything downstream of them:
//! - a different service (provider step on) clears provider, date, and time
//! - any provider pick clears date and time
//! - any date pick clears time
//!
//! Dependent fetches carry a generation ticket from `ListState`, so a late
//! slot list for an abandoned date is dropped instead of rendered.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use time::Date;

use super::fetch::ListState;
use crate::net::api::ApiError;
use crate::net::types::{NewAppointment, Price, Provider, Service};
use crate::util::dates;

/// Booking behavior fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingOptions {
    pub provider_step: bool,
    pub default_provider_id: i64,
}

impl Default for BookingOptions {
    fn default() -> Self {
        Self { provider_step: false, default_provider_id: 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStep {
    SelectService,
    SelectProvider,
    SelectDateTime,
    Confirm,
    Submitted,
}

impl BookingStep {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SelectService => "Service",
            Self::SelectProvider => "Provider",
            Self::SelectDateTime => "Date & Time",
            Self::Confirm | Self::Submitted => "Confirm",
        }
    }
}

/// The user's choices so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub service_id: Option<i64>,
    pub provider_id: Option<i64>,
    pub date: Option<Date>,
    pub time: Option<String>,
    pub notes: String,
}

/// Network work requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingCommand {
    FetchServices { ticket: u64 },
    FetchProviders { service_id: i64, ticket: u64 },
    FetchSlots { provider_id: i64, date: Date, ticket: u64 },
    RedirectToLogin,
    Submit(NewAppointment),
}

/// Rejected transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("please choose a service first")]
    MissingService,

    #[error("please choose a provider first")]
    MissingProvider,

    #[error("please choose a date first")]
    MissingDate,

    #[error("please choose a time first")]
    MissingTime,

    #[error("provider {0} does not offer this service")]
    UnknownProvider(i64),

    #[error("the provider is fixed for this booking")]
    ProviderStepDisabled,

    #[error("appointments can only be booked from {earliest} onwards")]
    DateTooEarly { earliest: Date },

    #[error("{0} is not an available time")]
    SlotUnavailable(String),

    #[error("this booking is already being submitted")]
    AlreadySubmitting,
}

/// Read-only recap rendered on the Confirm step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSummary {
    pub service_name: String,
    pub provider_name: Option<String>,
    pub date: Date,
    pub time: String,
    pub duration: u32,
    pub price: Price,
}

#[derive(Clone, Debug)]
pub struct BookingFlow {
    options: BookingOptions,
    step: BookingStep,
    draft: BookingDraft,
    today: Date,
    /// Provider came from the URL; the provider step is skipped.
    provider_locked: bool,
    /// Service the current provider list belongs to.
    providers_for: Option<i64>,
    pub services: ListState<Service>,
    pub providers: ListState<Provider>,
    pub slots: ListState<String>,
    submitting: bool,
    error: Option<String>,
    /// Last rejected transition, shown above the current step.
    problem: Option<String>,
}

impl BookingFlow {
    #[must_use]
    pub fn new(options: BookingOptions, service_id: Option<i64>, provider_id: Option<i64>, today: Date) -> Self {
        let mut flow = Self {
            options,
            step: BookingStep::SelectService,
            draft: BookingDraft { service_id, provider_id, ..BookingDraft::default() },
            today,
            provider_locked: provider_id.is_some(),
            providers_for: None,
            services: ListState::default(),
            providers: ListState::default(),
            slots: ListState::default(),
            submitting: false,
            error: None,
            problem: None,
        };
        if service_id.is_some() {
            flow.step = flow.step_after_service();
        }
        flow
    }

    /// Initial fetches for the entry step.
    pub fn start(&mut self) -> Vec<BookingCommand> {
        let mut commands = vec![BookingCommand::FetchServices { ticket: self.services.begin_load() }];
        if self.step == BookingStep::SelectProvider
            && let Some(service_id) = self.draft.service_id
        {
            commands.push(self.load_providers(service_id));
        }
        commands
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn step(&self) -> BookingStep {
        self.step
    }

    #[must_use]
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    #[must_use]
    pub fn submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn problem(&self) -> Option<&str> {
        self.problem.as_deref()
    }

    /// Keep the outcome of a transition: a rejection becomes the current
    /// problem, success clears it.
    pub fn settle<T>(&mut self, result: Result<T, BookingError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.problem = None;
                Some(value)
            }
            Err(e) => {
                self.problem = Some(e.to_string());
                None
            }
        }
    }

    /// Earliest selectable date.
    #[must_use]
    pub fn min_date(&self) -> Date {
        dates::tomorrow(self.today)
    }

    #[must_use]
    pub fn provider_step_active(&self) -> bool {
        self.options.provider_step && !self.provider_locked
    }

    /// Provider slots and the booking are requested for.
    #[must_use]
    pub fn effective_provider(&self) -> Option<i64> {
        if self.provider_step_active() {
            self.draft.provider_id
        } else {
            self.draft.provider_id.or(Some(self.options.default_provider_id))
        }
    }

    /// Steps shown in the progress indicator.
    #[must_use]
    pub fn visible_steps(&self) -> Vec<BookingStep> {
        let mut steps = vec![BookingStep::SelectService];
        if self.provider_step_active() {
            steps.push(BookingStep::SelectProvider);
        }
        steps.extend([BookingStep::SelectDateTime, BookingStep::Confirm]);
        steps
    }

    #[must_use]
    pub fn selected_service(&self) -> Option<&Service> {
        let id = self.draft.service_id?;
        self.services.items.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn selected_provider(&self) -> Option<&Provider> {
        let id = self.draft.provider_id?;
        self.providers.items.iter().find(|p| p.id == id)
    }

    /// `None` until service, date, and time are all known.
    #[must_use]
    pub fn summary(&self) -> Option<BookingSummary> {
        let service = self.selected_service()?;
        Some(BookingSummary {
            service_name: service.name.clone(),
            provider_name: self.selected_provider().map(|p| p.name.clone()),
            date: self.draft.date?,
            time: self.draft.time.clone()?,
            duration: service.duration,
            price: service.price,
        })
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Choose a service and advance.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySubmitting` while a submission is in flight.
    pub fn select_service(&mut self, service_id: i64) -> Result<Vec<BookingCommand>, BookingError> {
        self.ensure_idle()?;
        let changed = self.draft.service_id != Some(service_id);
        self.draft.service_id = Some(service_id);
        self.error = None;

        if changed && self.provider_step_active() {
            self.draft.provider_id = None;
            self.clear_date();
        }
        self.step = self.step_after_service();

        if self.step == BookingStep::SelectProvider && self.providers_for != Some(service_id) {
            return Ok(vec![self.load_providers(service_id)]);
        }
        Ok(Vec::new())
    }

    /// Choose a provider and advance to date selection. Any chosen date and
    /// time are cleared.
    ///
    /// # Errors
    ///
    /// Fails when the provider step is off, no service is chosen, or the
    /// provider is not listed for the service.
    pub fn select_provider(&mut self, provider_id: i64) -> Result<(), BookingError> {
        self.ensure_idle()?;
        if !self.provider_step_active() {
            return Err(BookingError::ProviderStepDisabled);
        }
        if self.draft.service_id.is_none() {
            return Err(BookingError::MissingService);
        }
        if !self.providers.items.iter().any(|p| p.id == provider_id) {
            return Err(BookingError::UnknownProvider(provider_id));
        }
        self.draft.provider_id = Some(provider_id);
        self.clear_date();
        self.error = None;
        self.step = BookingStep::SelectDateTime;
        Ok(())
    }

    /// Choose a date, dropping any chosen time, and request its slots.
    ///
    /// # Errors
    ///
    /// Fails when service or provider is missing, or the date is before
    /// tomorrow.
    pub fn choose_date(&mut self, date: Date) -> Result<BookingCommand, BookingError> {
        self.ensure_idle()?;
        if self.draft.service_id.is_none() {
            return Err(BookingError::MissingService);
        }
        let provider_id = self.effective_provider().ok_or(BookingError::MissingProvider)?;
        let earliest = self.min_date();
        if date < earliest {
            return Err(BookingError::DateTooEarly { earliest });
        }
        self.draft.date = Some(date);
        self.draft.time = None;
        self.step = BookingStep::SelectDateTime;
        let ticket = self.slots.begin_load();
        Ok(BookingCommand::FetchSlots { provider_id, date, ticket })
    }

    /// Forget the chosen date and time (the date input was emptied).
    pub fn clear_date(&mut self) {
        self.problem = None;
        self.draft.date = None;
        self.draft.time = None;
        self.slots.invalidate();
        if self.step == BookingStep::Confirm {
            self.step = BookingStep::SelectDateTime;
        }
    }

    /// Pick one of the listed slots and move to Confirm.
    ///
    /// # Errors
    ///
    /// Fails without a date or when `slot` is not in the current slot list.
    pub fn select_time(&mut self, slot: &str) -> Result<(), BookingError> {
        self.ensure_idle()?;
        if self.draft.date.is_none() {
            return Err(BookingError::MissingDate);
        }
        if self.slots.loading || !self.slots.items.iter().any(|s| s == slot) {
            return Err(BookingError::SlotUnavailable(slot.to_owned()));
        }
        self.draft.time = Some(slot.to_owned());
        self.error = None;
        self.step = BookingStep::Confirm;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: String) {
        self.draft.notes = notes;
    }

    /// Step back one screen, keeping every choice made so far.
    pub fn back(&mut self) {
        if self.submitting {
            return;
        }
        self.error = None;
        self.problem = None;
        self.step = match self.step {
            BookingStep::Confirm => BookingStep::SelectDateTime,
            BookingStep::SelectDateTime if self.provider_step_active() => BookingStep::SelectProvider,
            BookingStep::SelectDateTime | BookingStep::SelectProvider => BookingStep::SelectService,
            other => other,
        };
    }

    // =========================================================================
    // RESPONSES
    // =========================================================================

    pub fn receive_services(&mut self, ticket: u64, result: Result<Vec<Service>, ApiError>) -> bool {
        self.services.finish(ticket, result)
    }

    pub fn receive_providers(&mut self, ticket: u64, result: Result<Vec<Provider>, ApiError>) -> bool {
        self.providers.finish(ticket, result)
    }

    pub fn receive_slots(&mut self, ticket: u64, result: Result<Vec<String>, ApiError>) -> bool {
        self.slots.finish(ticket, result)
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Build the booking request. Anonymous visitors are sent to login before
    /// anything else is checked.
    ///
    /// # Errors
    ///
    /// Fails while already submitting or when a choice is missing.
    pub fn submit(&mut self, authenticated: bool) -> Result<BookingCommand, BookingError> {
        if !authenticated {
            return Ok(BookingCommand::RedirectToLogin);
        }
        self.ensure_idle()?;
        let service_id = self.draft.service_id.ok_or(BookingError::MissingService)?;
        let provider_id = self.effective_provider().ok_or(BookingError::MissingProvider)?;
        let date = self.draft.date.ok_or(BookingError::MissingDate)?;
        let time = self.draft.time.clone().ok_or(BookingError::MissingTime)?;

        self.submitting = true;
        self.error = None;
        Ok(BookingCommand::Submit(NewAppointment {
            service_id,
            provider_id,
            appointment_date: dates::iso(date),
            appointment_time: time,
            notes: self.draft.notes.trim().to_owned(),
        }))
    }

    /// Stay on Confirm with the server's message; the draft is untouched.
    pub fn submission_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
        self.step = BookingStep::Confirm;
    }

    pub fn submission_succeeded(&mut self) {
        self.submitting = false;
        self.step = BookingStep::Submitted;
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn ensure_idle(&self) -> Result<(), BookingError> {
        if self.submitting { Err(BookingError::AlreadySubmitting) } else { Ok(()) }
    }

    fn step_after_service(&self) -> BookingStep {
        if self.provider_step_active() {
            BookingStep::SelectProvider
        } else {
            BookingStep::SelectDateTime
        }
    }

    fn load_providers(&mut self, service_id: i64) -> BookingCommand {
        self.providers_for = Some(service_id);
        self.providers.invalidate();
        BookingCommand::FetchProviders { service_id, ticket: self.providers.begin_load() }
    }
}
