//! Route and query parameter parsing.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Positive numeric id from a path or query parameter.
#[must_use]
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// `?success=true` after a completed booking.
#[must_use]
pub fn is_success_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
}
