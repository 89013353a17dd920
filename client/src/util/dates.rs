//! Calendar helpers: the browser's local clock and API date/time parsing.
//!
//! The API sends dates as `YYYY-MM-DD`, sometimes with a trailing
//! `T00:00:00.000Z`, and times as `HH:MM` or `HH:MM:SS`.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

/// Current local wall-clock time. Uses the browser clock under hydrate and
/// UTC elsewhere.
#[must_use]
pub fn now() -> PrimitiveDateTime {
    #[cfg(feature = "hydrate")]
    {
        let js = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let parts = (
            js.get_full_year() as i32,
            time::Month::try_from(js.get_month() as u8 + 1),
            js.get_date() as u8,
            js.get_hours() as u8,
            js.get_minutes() as u8,
        );
        match parts {
            (year, Ok(month), day, hour, minute) => Date::from_calendar_date(year, month, day)
                .ok()
                .zip(Time::from_hms(hour, minute, 0).ok())
                .map_or(PrimitiveDateTime::MIN, |(date, time)| PrimitiveDateTime::new(date, time)),
            _ => PrimitiveDateTime::MIN,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let utc = time::OffsetDateTime::now_utc();
        PrimitiveDateTime::new(utc.date(), utc.time())
    }
}

#[must_use]
pub fn today() -> Date {
    now().date()
}

/// Earliest bookable day.
#[must_use]
pub fn tomorrow(today: Date) -> Date {
    today.next_day().unwrap_or(today)
}

/// `YYYY-MM-DD`, as used by `<input type="date">` and the API.
#[must_use]
pub fn iso(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Parse the date part of an API date or date-time string.
#[must_use]
pub fn parse_iso(value: &str) -> Option<Date> {
    let head = value.trim().get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Parse `HH:MM` or `HH:MM:SS`.
#[must_use]
pub fn parse_clock(value: &str) -> Option<Time> {
    let value = value.trim();
    Time::parse(value, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(value, format_description!("[hour]:[minute]")))
        .ok()
}

/// Whether an appointment's start lies before `now`. Unparseable values are
/// treated as not past.
#[must_use]
pub fn is_past(date: &str, clock: &str, now: PrimitiveDateTime) -> bool {
    match (parse_iso(date), parse_clock(clock)) {
        (Some(date), Some(clock)) => PrimitiveDateTime::new(date, clock) < now,
        _ => false,
    }
}
