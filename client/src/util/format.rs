//! Display formatting for prices, ratings, dates, and names.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::Price;
use crate::util::dates::parse_iso;

pub const DAY_NAMES: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// `£8`, `£8.50`.
#[must_use]
pub fn money(price: Price) -> String {
    format!("£{price}")
}

/// Five-character star bar, e.g. `★★★★☆` for 4.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Average rating rounded to whole stars.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn whole_stars(value: f64) -> u8 {
    if value.is_finite() { value.round().clamp(0.0, 5.0) as u8 } else { 0 }
}

/// Average rating to one decimal place.
#[must_use]
pub fn rating(value: f64) -> String {
    format!("{value:.1}")
}

#[must_use]
pub fn review_count(count: i64) -> String {
    if count == 1 { "(1 review)".to_owned() } else { format!("({count} reviews)") }
}

#[must_use]
pub fn day_name(day_of_week: u8) -> &'static str {
    DAY_NAMES.get(usize::from(day_of_week)).copied().unwrap_or("Unknown")
}

/// Drop seconds from `HH:MM:SS`.
#[must_use]
pub fn short_time(value: &str) -> &str {
    match value.get(..5) {
        Some(head) if value.len() > 5 && head.as_bytes().get(2) == Some(&b':') => head,
        _ => value,
    }
}

/// `Monday, October 19, 2026`.
#[must_use]
pub fn long_date(date: Date) -> String {
    date.format(format_description!("[weekday], [month repr:long] [day padding:none], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// `Mon, Oct 19`.
#[must_use]
pub fn short_date(date: Date) -> String {
    date.format(format_description!("[weekday repr:short], [month repr:short] [day padding:none]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Short form of an API date string, or the raw value when unparseable.
#[must_use]
pub fn api_date(value: &str) -> String {
    parse_iso(value).map_or_else(|| value.to_owned(), short_date)
}

/// Up to two uppercase initials for avatar placeholders.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
