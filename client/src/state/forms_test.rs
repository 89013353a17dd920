use super::*;

fn brow_wax() -> Service {
    Service {
        id: 1,
        name: "Brow Wax".to_owned(),
        description: Some("Shape and tidy".to_owned()),
        price: Price::from_major(8).unwrap(),
        duration: 15,
        category: Some("Brows".to_owned()),
    }
}

// =============================================================
// Service form
// =============================================================

#[test]
fn service_form_round_trips_fetched_service() {
    let service = brow_wax();
    let payload = ServiceForm::from_service(&service).validate().unwrap();
    assert_eq!(payload.name, service.name);
    assert_eq!(Some(payload.description), service.description);
    assert_eq!(payload.price, service.price);
    assert_eq!(payload.duration, service.duration);
    assert_eq!(Some(payload.category), service.category);
}

#[test]
fn service_form_requires_name_price_and_duration() {
    let valid = ServiceForm {
        name: "Facial".to_owned(),
        price: "45.50".to_owned(),
        duration: "60".to_owned(),
        ..ServiceForm::default()
    };
    assert_eq!(valid.validate().unwrap().price, Price::from_minor(4550));

    let nameless = ServiceForm { name: "  ".to_owned(), ..valid.clone() };
    assert_eq!(nameless.validate(), Err("Service name is required."));

    let bad_price = ServiceForm { price: "abc".to_owned(), ..valid.clone() };
    assert!(bad_price.validate().is_err());

    let too_short = ServiceForm { duration: "4".to_owned(), ..valid };
    assert_eq!(too_short.validate(), Err("Duration must be at least 5 minutes."));
}

// =============================================================
// Product form
// =============================================================

#[test]
fn product_form_round_trips_fetched_product() {
    let product = Product {
        id: 3,
        name: "Serum".to_owned(),
        description: Some("Hydrating".to_owned()),
        price: Price::from_minor(2450),
        category: Some("Skincare".to_owned()),
        stock: 12,
        image: Some("/uploads/serum.png".to_owned()),
    };
    let payload = ProductForm::from_product(&product).validate().unwrap();
    assert_eq!(payload.name, "Serum");
    assert_eq!(payload.price, product.price);
    assert_eq!(payload.stock, 12);
    assert_eq!(payload.category, "Skincare");
}

#[test]
fn product_stock_defaults_to_zero_and_rejects_negatives() {
    let form = ProductForm { name: "Balm".to_owned(), price: "5".to_owned(), ..ProductForm::default() };
    assert_eq!(form.validate().unwrap().stock, 0);
    let negative = ProductForm { stock: "-2".to_owned(), ..form };
    assert!(negative.validate().is_err());
}

// =============================================================
// Review form
// =============================================================

#[test]
fn review_form_defaults_to_five_stars() {
    assert_eq!(ReviewForm::default().rating, 5);
}

#[test]
fn review_form_requires_comment_and_valid_rating() {
    let blank = ReviewForm { rating: 4, comment: "   ".to_owned() };
    assert!(blank.validate(1, None).is_err());

    let zero = ReviewForm { rating: 0, comment: "Great".to_owned() };
    assert_eq!(zero.validate(1, None), Err("Rating must be between 1 and 5."));

    let review = ReviewForm { rating: 4, comment: " Great brows ".to_owned() }.validate(2, Some(10)).unwrap();
    assert_eq!(review.provider_id, 2);
    assert_eq!(review.appointment_id, Some(10));
    assert_eq!(review.comment, "Great brows");
}

// =============================================================
// Account forms
// =============================================================

#[test]
fn login_form_trims_email_and_requires_both_fields() {
    let form = LoginForm { email: " ana@example.com ".to_owned(), password: "pw".to_owned() };
    assert_eq!(form.validate().unwrap().email, "ana@example.com");
    let missing = LoginForm { email: "ana@example.com".to_owned(), password: String::new() };
    assert_eq!(missing.validate(), Err("Enter your email and password."));
}

fn register_form() -> RegisterForm {
    RegisterForm {
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: String::new(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

#[test]
fn register_form_builds_client_account() {
    let request = register_form().validate().unwrap();
    assert_eq!(request.role, Role::Client);
    assert!(request.phone.is_none());
}

#[test]
fn register_form_reports_first_problem() {
    let bad_email = RegisterForm { email: "ana@".to_owned(), ..register_form() };
    assert_eq!(bad_email.validate(), Err("Enter a valid email address."));

    let short = RegisterForm { password: "abc".to_owned(), confirm_password: "abc".to_owned(), ..register_form() };
    assert_eq!(short.validate(), Err("Password must be at least 6 characters."));

    let mismatch = RegisterForm { confirm_password: "secret2".to_owned(), ..register_form() };
    assert_eq!(mismatch.validate(), Err("Passwords do not match."));
}

#[test]
fn profile_form_trims_on_save() {
    let form = ProfileForm { bio: " Brow specialist ".to_owned(), specialties: "Brows, Lashes ".to_owned() };
    let profile = form.to_profile();
    assert_eq!(profile.bio, "Brow specialist");
    assert_eq!(profile.specialties, "Brows, Lashes");
}
