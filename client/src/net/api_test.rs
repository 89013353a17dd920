use super::*;

#[test]
fn server_error_message_prefers_message_field() {
    let body = r#"{"message":"Time slot already booked","error":"conflict"}"#;
    assert_eq!(server_error_message(body).as_deref(), Some("Time slot already booked"));
}

#[test]
fn server_error_message_falls_back_to_error_field() {
    assert_eq!(server_error_message(r#"{"error":"Not authorized"}"#).as_deref(), Some("Not authorized"));
}

#[test]
fn server_error_message_reads_first_validation_error() {
    let body = r#"{"errors":[{"msg":"Price must be a number","param":"price"},{"msg":"other"}]}"#;
    assert_eq!(server_error_message(body).as_deref(), Some("Price must be a number"));
}

#[test]
fn server_error_message_ignores_blank_and_non_json_bodies() {
    assert_eq!(server_error_message(""), None);
    assert_eq!(server_error_message("<html>502</html>"), None);
    assert_eq!(server_error_message(r#"{"message":"   "}"#), None);
}

#[test]
fn user_message_uses_server_wording_when_present() {
    let err = ApiError::Server { status: 400, message: Some("Slot taken".to_owned()) };
    assert_eq!(err.user_message("Failed to book appointment"), "Slot taken");
}

#[test]
fn user_message_falls_back_for_bare_failures() {
    let bare = ApiError::Server { status: 500, message: None };
    assert_eq!(bare.user_message("Failed to book appointment"), "Failed to book appointment");
    let network = ApiError::Network("offline".to_owned());
    assert_eq!(network.user_message("Failed to save"), "Failed to save");
}

#[test]
fn server_error_display_formats_status_without_message() {
    let err = ApiError::Server { status: 503, message: None };
    assert_eq!(err.to_string(), "request failed: 503");
}

#[test]
fn credential_routes_do_not_tear_down_session() {
    assert!(!tears_down_session(&endpoints::auth::login()));
    assert!(!tears_down_session(&endpoints::auth::register()));
    assert!(tears_down_session(&endpoints::auth::me()));
    assert!(tears_down_session(&endpoints::appointments::list_mine(None)));
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc.def"), "Bearer abc.def");
}
