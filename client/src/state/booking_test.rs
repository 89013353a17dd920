use super::*;
use time::macros::date;

const TODAY: Date = date!(2026 - 10 - 18);
const TOMORROW: Date = date!(2026 - 10 - 19);

fn service(id: i64, name: &str, pounds: i64, duration: u32) -> Service {
    Service {
        id,
        name: name.to_owned(),
        description: None,
        price: Price::from_major(pounds).unwrap(),
        duration,
        category: Some("Brows".to_owned()),
    }
}

fn provider(id: i64, name: &str) -> Provider {
    Provider {
        id,
        name: name.to_owned(),
        bio: None,
        specialties: None,
        rating: 0.0,
        total_reviews: 0,
        image: None,
        services: Vec::new(),
        availability: Vec::new(),
        email: None,
        phone: None,
    }
}

fn single_provider() -> BookingOptions {
    BookingOptions { provider_step: false, default_provider_id: 1 }
}

fn provider_aware() -> BookingOptions {
    BookingOptions { provider_step: true, default_provider_id: 1 }
}

fn slots_ticket(command: &BookingCommand) -> u64 {
    match command {
        BookingCommand::FetchSlots { ticket, .. } => *ticket,
        other => panic!("expected slot fetch, got {other:?}"),
    }
}

fn providers_ticket(commands: &[BookingCommand]) -> u64 {
    commands
        .iter()
        .find_map(|c| match c {
            BookingCommand::FetchProviders { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("provider fetch")
}

/// Flow with services loaded and a service already chosen.
fn flow_with_service(options: BookingOptions) -> BookingFlow {
    let mut flow = BookingFlow::new(options, None, None, TODAY);
    let commands = flow.start();
    let BookingCommand::FetchServices { ticket } = commands[0] else {
        panic!("expected services fetch first");
    };
    flow.receive_services(ticket, Ok(vec![service(1, "Brow Wax", 8, 15), service(2, "Lash Lift", 45, 60)]));
    let commands = flow.select_service(1).unwrap();
    if options.provider_step {
        let ticket = providers_ticket(&commands);
        flow.receive_providers(ticket, Ok(vec![provider(1, "Mia"), provider(2, "Zoe")]));
    }
    flow
}

fn pick_slot(flow: &mut BookingFlow, date: Date, slots: &[&str], slot: &str) {
    let ticket = slots_ticket(&flow.choose_date(date).unwrap());
    flow.receive_slots(ticket, Ok(slots.iter().map(|s| (*s).to_owned()).collect()));
    flow.select_time(slot).unwrap();
}

// =============================================================
// Entry
// =============================================================

#[test]
fn entry_without_service_starts_at_service_step() {
    let mut flow = BookingFlow::new(single_provider(), None, None, TODAY);
    assert_eq!(flow.step(), BookingStep::SelectService);
    assert!(matches!(flow.start().as_slice(), [BookingCommand::FetchServices { .. }]));
}

#[test]
fn fresh_flow_shows_service_list_as_loading() {
    let flow = BookingFlow::new(single_provider(), None, None, TOMORROW);
    assert_eq!(flow.services.view(), crate::state::fetch::ListView::Loading);
}

#[test]
fn preselected_service_skips_service_step() {
    let flow = BookingFlow::new(single_provider(), Some(4), None, TODAY);
    assert_eq!(flow.step(), BookingStep::SelectDateTime);
    assert_eq!(flow.draft().service_id, Some(4));
}

#[test]
fn preselected_service_in_provider_mode_fetches_providers() {
    let mut flow = BookingFlow::new(provider_aware(), Some(4), None, TODAY);
    assert_eq!(flow.step(), BookingStep::SelectProvider);
    let commands = flow.start();
    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[1], BookingCommand::FetchProviders { service_id: 4, .. }));
}

#[test]
fn preselected_provider_skips_provider_step() {
    let mut flow = BookingFlow::new(provider_aware(), Some(4), Some(7), TODAY);
    assert_eq!(flow.step(), BookingStep::SelectDateTime);
    assert!(!flow.provider_step_active());
    assert_eq!(
        flow.visible_steps(),
        vec![BookingStep::SelectService, BookingStep::SelectDateTime, BookingStep::Confirm]
    );
    let command = flow.choose_date(TOMORROW).unwrap();
    assert!(matches!(command, BookingCommand::FetchSlots { provider_id: 7, .. }));
}

#[test]
fn visible_steps_include_provider_when_enabled() {
    let flow = BookingFlow::new(provider_aware(), None, None, TODAY);
    assert_eq!(flow.visible_steps().len(), 4);
    assert_eq!(flow.visible_steps()[1].label(), "Provider");
}

// =============================================================
// Date and time
// =============================================================

#[test]
fn dates_before_tomorrow_are_rejected() {
    let mut flow = flow_with_service(single_provider());
    assert_eq!(flow.min_date(), TOMORROW);
    assert_eq!(flow.choose_date(TODAY), Err(BookingError::DateTooEarly { earliest: TOMORROW }));
    assert!(flow.draft().date.is_none());
}

#[test]
fn choosing_a_date_fetches_slots_for_default_provider() {
    let mut flow = flow_with_service(single_provider());
    let command = flow.choose_date(TOMORROW).unwrap();
    assert!(matches!(command, BookingCommand::FetchSlots { provider_id: 1, date, .. } if date == TOMORROW));
    assert!(flow.slots.loading);
}

#[test]
fn changing_the_date_clears_the_time() {
    let mut flow = flow_with_service(single_provider());
    pick_slot(&mut flow, TOMORROW, &["10:00", "10:30"], "10:00");
    assert_eq!(flow.step(), BookingStep::Confirm);

    flow.back();
    flow.choose_date(date!(2026 - 10 - 20)).unwrap();
    assert!(flow.draft().time.is_none());
    assert_eq!(flow.step(), BookingStep::SelectDateTime);
}

#[test]
fn stale_slot_response_is_ignored() {
    let mut flow = flow_with_service(single_provider());
    let first = slots_ticket(&flow.choose_date(TOMORROW).unwrap());
    let second = slots_ticket(&flow.choose_date(date!(2026 - 10 - 20)).unwrap());

    assert!(flow.receive_slots(second, Ok(vec!["14:00".to_owned()])));
    assert!(!flow.receive_slots(first, Ok(vec!["09:00".to_owned()])));
    assert_eq!(flow.slots.items, vec!["14:00".to_owned()]);
}

#[test]
fn date_without_availability_yields_no_slots() {
    let mut flow = flow_with_service(single_provider());
    let ticket = slots_ticket(&flow.choose_date(TOMORROW).unwrap());
    flow.receive_slots(ticket, Ok(Vec::new()));
    assert!(flow.slots.is_empty());
    assert_eq!(flow.select_time("10:00"), Err(BookingError::SlotUnavailable("10:00".to_owned())));
    assert_eq!(flow.step(), BookingStep::SelectDateTime);
}

#[test]
fn slot_fetch_failure_degrades_to_no_slots() {
    let mut flow = flow_with_service(single_provider());
    let ticket = slots_ticket(&flow.choose_date(TOMORROW).unwrap());
    flow.receive_slots(ticket, Err(ApiError::Network("offline".to_owned())));
    assert!(flow.slots.is_empty());
}

#[test]
fn clear_date_drops_time_and_pending_slots() {
    let mut flow = flow_with_service(single_provider());
    let ticket = slots_ticket(&flow.choose_date(TOMORROW).unwrap());
    flow.clear_date();
    assert!(!flow.receive_slots(ticket, Ok(vec!["10:00".to_owned()])));
    assert!(flow.draft().date.is_none());
}

// =============================================================
// Provider step
// =============================================================

#[test]
fn selecting_a_provider_clears_date_and_time() {
    let mut flow = flow_with_service(provider_aware());
    flow.select_provider(1).unwrap();
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");

    flow.back();
    flow.back();
    assert_eq!(flow.step(), BookingStep::SelectProvider);
    flow.select_provider(2).unwrap();

    assert_eq!(flow.draft().provider_id, Some(2));
    assert!(flow.draft().date.is_none());
    assert!(flow.draft().time.is_none());
    assert!(matches!(flow.submit(true), Err(BookingError::MissingDate)));
}

#[test]
fn reselecting_the_same_provider_still_clears_date() {
    let mut flow = flow_with_service(provider_aware());
    flow.select_provider(1).unwrap();
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");
    flow.select_provider(1).unwrap();
    assert!(flow.draft().date.is_none());
}

#[test]
fn unlisted_provider_is_rejected() {
    let mut flow = flow_with_service(provider_aware());
    assert_eq!(flow.select_provider(99), Err(BookingError::UnknownProvider(99)));
}

#[test]
fn provider_selection_requires_provider_step() {
    let mut flow = flow_with_service(single_provider());
    assert_eq!(flow.select_provider(1), Err(BookingError::ProviderStepDisabled));
}

#[test]
fn date_requires_provider_in_provider_mode() {
    let mut flow = flow_with_service(provider_aware());
    assert_eq!(flow.choose_date(TOMORROW), Err(BookingError::MissingProvider));
}

#[test]
fn changing_service_in_provider_mode_resets_provider_and_refetches() {
    let mut flow = flow_with_service(provider_aware());
    flow.select_provider(1).unwrap();
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");

    let commands = flow.select_service(2).unwrap();
    assert!(matches!(commands.as_slice(), [BookingCommand::FetchProviders { service_id: 2, .. }]));
    assert_eq!(flow.step(), BookingStep::SelectProvider);
    assert!(flow.draft().provider_id.is_none());
    assert!(flow.draft().date.is_none());
    assert!(flow.providers.items.is_empty());
}

#[test]
fn reselecting_same_service_keeps_choices() {
    let mut flow = flow_with_service(provider_aware());
    flow.select_provider(1).unwrap();
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");

    let commands = flow.select_service(1).unwrap();
    assert!(commands.is_empty());
    assert_eq!(flow.draft().provider_id, Some(1));
    assert_eq!(flow.draft().time.as_deref(), Some("10:00"));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn back_returns_to_prior_step_without_losing_data() {
    let mut flow = flow_with_service(single_provider());
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");
    flow.set_notes("first visit".to_owned());

    flow.back();
    assert_eq!(flow.step(), BookingStep::SelectDateTime);
    flow.back();
    assert_eq!(flow.step(), BookingStep::SelectService);
    flow.back();
    assert_eq!(flow.step(), BookingStep::SelectService);

    assert_eq!(flow.draft().date, Some(TOMORROW));
    assert_eq!(flow.draft().time.as_deref(), Some("10:00"));
    assert_eq!(flow.draft().notes, "first visit");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn anonymous_submit_redirects_to_login_regardless_of_form() {
    let mut empty = BookingFlow::new(single_provider(), None, None, TODAY);
    assert_eq!(empty.submit(false), Ok(BookingCommand::RedirectToLogin));
    assert!(!empty.submitting());

    let mut complete = flow_with_service(single_provider());
    pick_slot(&mut complete, TOMORROW, &["10:00"], "10:00");
    assert_eq!(complete.submit(false), Ok(BookingCommand::RedirectToLogin));
}

#[test]
fn brow_wax_booking_confirms_and_posts_without_status() {
    let mut flow = flow_with_service(single_provider());
    pick_slot(&mut flow, TOMORROW, &["09:30", "10:00"], "10:00");

    let summary = flow.summary().unwrap();
    assert_eq!(summary.service_name, "Brow Wax");
    assert_eq!(summary.price.to_string(), "8");
    assert_eq!(summary.duration, 15);
    assert_eq!(summary.time, "10:00");

    let Ok(BookingCommand::Submit(booking)) = flow.submit(true) else {
        panic!("expected submit command");
    };
    assert_eq!(booking.service_id, 1);
    assert_eq!(booking.provider_id, 1);
    assert_eq!(booking.appointment_date, "2026-10-19");
    assert_eq!(booking.appointment_time, "10:00");
    let json = serde_json::to_value(&booking).unwrap();
    assert!(json.get("status").is_none());
}

#[test]
fn failed_submission_stays_on_confirm_with_message() {
    let mut flow = flow_with_service(single_provider());
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");
    flow.set_notes("  window seat  ".to_owned());
    let Ok(BookingCommand::Submit(booking)) = flow.submit(true) else {
        panic!("expected submit command");
    };
    assert_eq!(booking.notes, "window seat");
    assert!(flow.submitting());
    assert_eq!(flow.submit(true), Err(BookingError::AlreadySubmitting));

    flow.submission_failed("Time slot already booked".to_owned());
    assert_eq!(flow.step(), BookingStep::Confirm);
    assert_eq!(flow.error(), Some("Time slot already booked"));
    assert_eq!(flow.draft().time.as_deref(), Some("10:00"));
    assert!(!flow.submitting());
}

#[test]
fn successful_submission_finishes_flow() {
    let mut flow = flow_with_service(single_provider());
    pick_slot(&mut flow, TOMORROW, &["10:00"], "10:00");
    flow.submit(true).unwrap();
    flow.submission_succeeded();
    assert_eq!(flow.step(), BookingStep::Submitted);
}

#[test]
fn submit_without_time_is_rejected() {
    let mut flow = flow_with_service(single_provider());
    flow.choose_date(TOMORROW).unwrap();
    assert_eq!(flow.submit(true), Err(BookingError::MissingTime));
}

#[test]
fn rejected_transition_is_reported_until_going_back() {
    let mut flow = flow_with_service(single_provider());
    let result = flow.choose_date(TODAY);
    assert!(flow.settle(result).is_none());
    assert!(flow.problem().is_some_and(|p| p.contains("onwards")));

    flow.back();
    assert_eq!(flow.step(), BookingStep::SelectService);
    assert_eq!(flow.problem(), None);
}

#[test]
fn accepted_transition_clears_earlier_problem() {
    let mut flow = flow_with_service(single_provider());
    let rejected = flow.choose_date(TODAY);
    flow.settle(rejected);
    let accepted = flow.choose_date(TOMORROW);
    assert!(flow.settle(accepted).is_some());
    assert_eq!(flow.problem(), None);
}
