use super::*;

#[test]
fn parse_id_accepts_positive_integers() {
    assert_eq!(parse_id(Some("12")), Some(12));
    assert_eq!(parse_id(Some(" 3 ")), Some(3));
}

#[test]
fn parse_id_rejects_missing_or_invalid() {
    assert_eq!(parse_id(None), None);
    assert_eq!(parse_id(Some("")), None);
    assert_eq!(parse_id(Some("0")), None);
    assert_eq!(parse_id(Some("-4")), None);
    assert_eq!(parse_id(Some("brow-wax")), None);
}

#[test]
fn success_flag_is_true_only_for_true() {
    assert!(is_success_flag(Some("true")));
    assert!(is_success_flag(Some("TRUE")));
    assert!(!is_success_flag(Some("1")));
    assert!(!is_success_flag(None));
}
