use super::*;
use time::macros::{date, datetime, time};

#[test]
fn tomorrow_rolls_over_month_and_year() {
    assert_eq!(tomorrow(date!(2026 - 10 - 18)), date!(2026 - 10 - 19));
    assert_eq!(tomorrow(date!(2026 - 12 - 31)), date!(2027 - 01 - 01));
}

#[test]
fn iso_zero_pads() {
    assert_eq!(iso(date!(2026 - 03 - 07)), "2026-03-07");
}

#[test]
fn parse_iso_accepts_plain_and_timestamp_forms() {
    assert_eq!(parse_iso("2026-10-19"), Some(date!(2026 - 10 - 19)));
    assert_eq!(parse_iso("2026-10-19T00:00:00.000Z"), Some(date!(2026 - 10 - 19)));
}

#[test]
fn parse_iso_rejects_invalid_dates() {
    assert_eq!(parse_iso(""), None);
    assert_eq!(parse_iso("2026-02-30"), None);
    assert_eq!(parse_iso("19/10/2026"), None);
}

#[test]
fn parse_clock_accepts_minutes_and_seconds() {
    assert_eq!(parse_clock("10:00"), Some(time!(10:00)));
    assert_eq!(parse_clock("09:30:15"), Some(time!(09:30:15)));
    assert_eq!(parse_clock("25:00"), None);
    assert_eq!(parse_clock("ten"), None);
}

#[test]
fn is_past_compares_date_and_time() {
    let now = datetime!(2026-10-18 12:00);
    assert!(is_past("2026-10-18", "11:59", now));
    assert!(!is_past("2026-10-18", "12:30", now));
    assert!(!is_past("2026-10-19", "09:00", now));
    assert!(!is_past("bogus", "09:00", now));
}

#[test]
fn today_is_not_before_epoch() {
    assert!(today() > date!(2000 - 01 - 01));
}

#[test]
fn parsers_require_zero_padded_fields() {
    assert_eq!(parse_clock("10:5"), None);
    assert_eq!(parse_clock("10:00 pm"), None);
    assert_eq!(parse_iso("2026-1-019"), None);
    assert_eq!(parse_iso("2026-10-1x"), None);
}
