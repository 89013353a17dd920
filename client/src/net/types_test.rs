use super::*;

// =============================================================
// Price
// =============================================================

#[test]
fn price_display_drops_zero_cents() {
    assert_eq!(Price::from_major(8).unwrap().to_string(), "8");
    assert_eq!(Price::from_minor(850).to_string(), "8.50");
    assert_eq!(Price::from_minor(1205).to_string(), "12.05");
}

#[test]
fn negative_prices_keep_sign_outside_the_digits() {
    assert_eq!(Price::from_minor(-50).to_string(), "-0.50");
    assert_eq!(Price::from_minor(-1205).to_string(), "-12.05");
    assert_eq!(Price::from_minor(-800).to_string(), "-8");
    assert_eq!(Price::from_minor(i64::MIN).to_string(), "-92233720368547758.08");
}

#[test]
fn from_major_rejects_overflow() {
    assert_eq!(Price::from_major(i64::MAX / 100 + 1), None);
    assert_eq!(Price::from_major(-3), Some(Price::from_minor(-300)));
}

#[test]
fn price_parse_accepts_common_decimal_shapes() {
    assert_eq!(Price::parse("8"), Some(Price::from_major(8).unwrap()));
    assert_eq!(Price::parse(" 8.5 "), Some(Price::from_minor(850)));
    assert_eq!(Price::parse("8.50"), Some(Price::from_minor(850)));
    assert_eq!(Price::parse("8.500"), Some(Price::from_minor(850)));
    assert_eq!(Price::parse(".75"), Some(Price::from_minor(75)));
}

#[test]
fn price_parse_rejects_garbage() {
    assert_eq!(Price::parse(""), None);
    assert_eq!(Price::parse("."), None);
    assert_eq!(Price::parse("-1"), None);
    assert_eq!(Price::parse("8.505"), None);
    assert_eq!(Price::parse("eight"), None);
}

#[test]
fn price_deserializes_from_number_or_decimal_string() {
    let from_int: Price = serde_json::from_value(serde_json::json!(8)).unwrap();
    let from_float: Price = serde_json::from_value(serde_json::json!(8.5)).unwrap();
    let from_string: Price = serde_json::from_value(serde_json::json!("30.00")).unwrap();
    assert_eq!(from_int, Price::from_major(8).unwrap());
    assert_eq!(from_float, Price::from_minor(850));
    assert_eq!(from_string, Price::from_major(30).unwrap());
}

#[test]
fn price_serializes_as_json_number() {
    assert_eq!(serde_json::to_value(Price::from_minor(850)).unwrap(), serde_json::json!(8.5));
}

// =============================================================
// Catalog entities
// =============================================================

#[test]
fn service_decodes_string_price_and_missing_optionals() {
    let service: Service = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Brow Wax",
        "price": "8.00",
        "duration": 15
    }))
    .unwrap();
    assert_eq!(service.id, 1);
    assert_eq!(service.price, Price::from_major(8).unwrap());
    assert_eq!(service.duration, 15);
    assert!(service.description.is_none());
    assert!(service.category.is_none());
}

#[test]
fn provider_tolerates_null_collections_and_string_rating() {
    let provider: Provider = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Mia",
        "rating": "4.50",
        "total_reviews": "12",
        "services": null,
        "availability": [{ "day_of_week": 1, "start_time": "09:00:00", "end_time": "17:00:00" }]
    }))
    .unwrap();
    assert!((provider.rating - 4.5).abs() < f64::EPSILON);
    assert_eq!(provider.total_reviews, 12);
    assert!(provider.services.is_empty());
    assert_eq!(provider.availability.len(), 1);
    assert_eq!(provider.availability[0].day_of_week, 1);
}

#[test]
fn availability_slot_without_id_skips_it_on_serialize() {
    let slot = AvailabilitySlot {
        id: None,
        day_of_week: 2,
        start_time: "09:00".to_owned(),
        end_time: "17:00".to_owned(),
    };
    let json = serde_json::to_value(&slot).unwrap();
    assert!(json.get("id").is_none());
    assert_eq!(json["day_of_week"], 2);
}

#[test]
fn product_payload_form_fields_are_ordered_text_parts() {
    let payload = ProductPayload {
        name: "Serum".to_owned(),
        description: "Hydrating".to_owned(),
        price: Price::from_minor(2450),
        category: "Skincare".to_owned(),
        stock: 7,
    };
    assert_eq!(
        payload.form_fields(),
        vec![
            ("name", "Serum".to_owned()),
            ("description", "Hydrating".to_owned()),
            ("price", "24.50".to_owned()),
            ("category", "Skincare".to_owned()),
            ("stock", "7".to_owned()),
        ]
    );
}

// =============================================================
// Appointments
// =============================================================

#[test]
fn appointment_status_round_trips_lowercase() {
    for status in AppointmentStatus::ALL {
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json, serde_json::json!(status.as_str()));
        assert_eq!(AppointmentStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(AppointmentStatus::parse("archived"), None);
}

#[test]
fn appointment_reads_wire_date_and_time_names() {
    let appointment: Appointment = serde_json::from_value(serde_json::json!({
        "id": 10,
        "service_id": 1,
        "provider_id": 1,
        "appointment_date": "2026-10-19",
        "appointment_time": "10:00",
        "status": "pending",
        "service_name": "Brow Wax",
        "price": "8.00"
    }))
    .unwrap();
    assert_eq!(appointment.date, "2026-10-19");
    assert_eq!(appointment.time, "10:00");
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.price, Some(Price::from_major(8).unwrap()));
    assert_eq!(appointment.duration, 0);
}

#[test]
fn new_appointment_carries_no_status_field() {
    let booking = NewAppointment {
        service_id: 1,
        provider_id: 1,
        appointment_date: "2026-10-19".to_owned(),
        appointment_time: "10:00".to_owned(),
        notes: String::new(),
    };
    let json = serde_json::to_value(&booking).unwrap();
    assert!(json.get("status").is_none());
    assert_eq!(json["appointment_time"], "10:00");
}

#[test]
fn slots_response_defaults_to_empty() {
    let empty: SlotsResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(empty.slots.is_empty());
    let some: SlotsResponse = serde_json::from_value(serde_json::json!({ "slots": ["10:00", "10:30"] })).unwrap();
    assert_eq!(some.slots, vec!["10:00".to_owned(), "10:30".to_owned()]);
}

// =============================================================
// Reviews
// =============================================================

fn review_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "provider_id": 1,
        "rating": 5,
        "comment": "Lovely",
        "client_name": "Ana",
        "created_at": "2026-10-01T12:00:00Z"
    })
}

#[test]
fn review_page_decodes_paged_envelope() {
    let page: ReviewPage = serde_json::from_value(serde_json::json!({
        "reviews": [review_json(1), review_json(2)],
        "pagination": { "page": 2, "pages": 4 }
    }))
    .unwrap();
    assert_eq!(page.reviews.len(), 2);
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 4);
}

#[test]
fn review_page_decodes_bare_array() {
    let page: ReviewPage = serde_json::from_value(serde_json::json!([review_json(7)])).unwrap();
    assert_eq!(page.reviews.len(), 1);
    assert_eq!(page.reviews[0].id, 7);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn review_rating_out_of_range_is_rejected() {
    let mut json = review_json(1);
    json["rating"] = serde_json::json!(300);
    assert!(serde_json::from_value::<Review>(json).is_err());
}

// =============================================================
// Auth
// =============================================================

#[test]
fn user_role_defaults_to_client() {
    let user: User = serde_json::from_value(serde_json::json!({ "id": "4", "name": "Ana" })).unwrap();
    assert_eq!(user.id, 4);
    assert_eq!(user.role, Role::Client);
}

#[test]
fn register_request_omits_missing_phone() {
    let request = RegisterRequest {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "secret1".to_owned(),
        phone: None,
        role: Role::Provider,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert!(json.get("phone").is_none());
    assert_eq!(json["role"], "provider");
}
