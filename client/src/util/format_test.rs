use super::*;
use time::macros::date;

#[test]
fn money_prefixes_pound_sign() {
    assert_eq!(money(Price::from_major(8).unwrap()), "£8");
    assert_eq!(money(Price::from_minor(2450)), "£24.50");
}

#[test]
fn stars_fill_up_to_rating() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn whole_stars_rounds_and_clamps() {
    assert_eq!(whole_stars(4.5), 5);
    assert_eq!(whole_stars(3.2), 3);
    assert_eq!(whole_stars(-1.0), 0);
    assert_eq!(whole_stars(f64::NAN), 0);
}

#[test]
fn rating_has_one_decimal() {
    assert_eq!(rating(4.0), "4.0");
    assert_eq!(rating(4.66), "4.7");
}

#[test]
fn review_count_pluralizes() {
    assert_eq!(review_count(1), "(1 review)");
    assert_eq!(review_count(12), "(12 reviews)");
}

#[test]
fn day_names_start_on_sunday() {
    assert_eq!(day_name(0), "Sunday");
    assert_eq!(day_name(6), "Saturday");
    assert_eq!(day_name(7), "Unknown");
}

#[test]
fn short_time_drops_seconds_only() {
    assert_eq!(short_time("10:00:00"), "10:00");
    assert_eq!(short_time("10:00"), "10:00");
    assert_eq!(short_time("soon"), "soon");
}

#[test]
fn long_and_short_dates() {
    let day = date!(2026 - 10 - 19);
    assert_eq!(long_date(day), "Monday, October 19, 2026");
    assert_eq!(short_date(day), "Mon, Oct 19");
}

#[test]
fn api_date_falls_back_to_raw_value() {
    assert_eq!(api_date("2026-10-19T00:00:00.000Z"), "Mon, Oct 19");
    assert_eq!(api_date("someday"), "someday");
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("mia van der berg"), "MV");
    assert_eq!(initials("Zoe"), "Z");
    assert_eq!(initials(""), "");
}

#[test]
fn dates_drop_day_padding() {
    let day = date!(2026 - 11 - 03);
    assert_eq!(long_date(day), "Tuesday, November 3, 2026");
    assert_eq!(short_date(day), "Tue, Nov 3");
}
