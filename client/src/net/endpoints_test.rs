use super::*;

#[test]
fn url_joins_base_without_double_slash() {
    let endpoint = services::get(4);
    assert_eq!(endpoint.url("http://localhost:5000/api/"), "http://localhost:5000/api/services/4");
    assert_eq!(endpoint.url("http://localhost:5000/api"), "http://localhost:5000/api/services/4");
}

#[test]
fn services_list_only_sends_category_when_set() {
    assert!(services::list(None).query.is_empty());
    assert!(services::list(Some("  ")).query.is_empty());
    assert_eq!(services::list(Some("Brows")).query, vec![("category", "Brows".to_owned())]);
}

#[test]
fn crud_routes_use_expected_methods() {
    assert_eq!(services::create().method, Method::Post);
    assert_eq!(services::update(2).method, Method::Put);
    assert_eq!(services::delete(2).method, Method::Delete);
    assert_eq!(products::update(9).path, "/products/9");
    assert_eq!(products::delete(9).method, Method::Delete);
    assert_eq!(reviews::delete(3).path, "/reviews/3");
}

#[test]
fn provider_routes_match_api_contract() {
    assert_eq!(providers::by_service(5).path, "/providers/service/5");
    assert_eq!(providers::update_profile().path, "/providers/profile");
    assert_eq!(providers::set_services().path, "/providers/services");
    assert_eq!(providers::set_availability().method, Method::Put);
}

#[test]
fn appointment_status_routes() {
    assert_eq!(appointments::update_status(12).path, "/appointments/12/status");
    assert_eq!(appointments::cancel(12).path, "/appointments/12/cancel");
    assert_eq!(appointments::cancel(12).method, Method::Put);
}

#[test]
fn list_mine_filters_by_status_name() {
    let all = appointments::list_mine(None);
    assert!(all.query.is_empty());
    let pending = appointments::list_mine(Some(AppointmentStatus::Pending));
    assert_eq!(pending.query, vec![("status", "pending".to_owned())]);
}

#[test]
fn provider_appointments_combine_status_and_date() {
    let endpoint = appointments::list_for_provider(Some(AppointmentStatus::Confirmed), Some("2026-10-20"));
    assert_eq!(
        endpoint.query,
        vec![("status", "confirmed".to_owned()), ("date", "2026-10-20".to_owned())]
    );
    assert!(appointments::list_for_provider(None, Some("")).query.is_empty());
}

#[test]
fn available_slots_carries_provider_and_date() {
    let endpoint = appointments::available_slots(1, "2026-10-19");
    assert_eq!(endpoint.path, "/appointments/slots");
    assert_eq!(
        endpoint.query,
        vec![("provider_id", "1".to_owned()), ("date", "2026-10-19".to_owned())]
    );
}

#[test]
fn provider_reviews_page_is_at_least_one() {
    assert_eq!(reviews::list_for_provider(8, 0).query, vec![("page", "1".to_owned())]);
    assert_eq!(reviews::list_for_provider(8, 3).query, vec![("page", "3".to_owned())]);
}

#[test]
fn auth_routes() {
    assert_eq!(auth::login().path, "/auth/login");
    assert_eq!(auth::register().method, Method::Post);
    assert_eq!(auth::me().method, Method::Get);
}
