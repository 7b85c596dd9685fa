//! Date parsing and trip status derivation.
//!
//! Trips keep their dates as the strings they were entered with. Status is
//! derived by reading those strings as calendar dates and comparing them
//! with "today" in the system time zone, inclusive on both ends.

use jiff::{civil::Date, tz::TimeZone, Timestamp};
use log::warn;

use crate::models::TripStatus;

const MONTH_DAY_YEAR_FORMATS: [&str; 4] = ["%b %d, %Y", "%b %d %Y", "%B %d, %Y", "%B %d %Y"];

/// Reads a trip date.
///
/// Accepted forms:
/// - `2026-01-02`
/// - RFC 3339 timestamps such as `2026-01-02T09:30:00+05:30` (converted to
///   the system time zone)
/// - `Jan 02, 2026`, `Jan 02 2026`, `January 2, 2026`
/// - weekday-prefixed browser strings such as
///   `Fri Jan 02 2026 00:00:00 GMT+0530`
///
/// Returns `None` when nothing matches.
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::dates::parse_trip_date;
/// use jiff::civil::date;
///
/// assert_eq!(parse_trip_date("Jan 02, 2026"), Some(date(2026, 1, 2)));
/// assert_eq!(parse_trip_date("2026-01-12"), Some(date(2026, 1, 12)));
/// assert_eq!(parse_trip_date("someday"), None);
/// ```
pub fn parse_trip_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp.to_zoned(TimeZone::system()).date());
    }
    if let Ok(date) = raw.parse::<Date>() {
        return Some(date);
    }
    if let Some(date) = parse_month_day_year(raw) {
        return Some(date);
    }

    // Browser-style "Fri Jan 02 2026 00:00:00 GMT..." strings
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() >= 4 {
        return parse_month_day_year(&tokens[1..4].join(" "));
    }

    None
}

fn parse_month_day_year(raw: &str) -> Option<Date> {
    MONTH_DAY_YEAR_FORMATS
        .iter()
        .find_map(|format| Date::strptime(format, raw).ok())
}

/// Derives a trip's status for `today` from its raw date strings.
///
/// - `Completed` when today is after the end date
/// - `Ongoing` when today lies within `[start, end]`
/// - `Upcoming` otherwise, including when either date cannot be read
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::{dates::derive_status, models::TripStatus};
/// use jiff::civil::date;
///
/// let today = date(2026, 1, 5);
/// assert_eq!(derive_status("2026-01-02", "2026-01-12", today), TripStatus::Ongoing);
/// assert_eq!(derive_status("2026-01-01", "2026-01-04", today), TripStatus::Completed);
/// assert_eq!(derive_status("2026-02-01", "2026-02-04", today), TripStatus::Upcoming);
/// ```
pub fn derive_status(start_date: &str, end_date: &str, today: Date) -> TripStatus {
    let start = parse_trip_date(start_date);
    let end = parse_trip_date(end_date);

    if start.is_none() || end.is_none() {
        warn!(
            "Unrecognized trip dates '{start_date}' - '{end_date}'; treating trip as upcoming"
        );
    }

    match (start, end) {
        (_, Some(end)) if today > end => TripStatus::Completed,
        (Some(start), Some(end)) if start <= today && today <= end => TripStatus::Ongoing,
        _ => TripStatus::Upcoming,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_trip_date("2026-02-05"), Some(date(2026, 2, 5)));
        assert_eq!(parse_trip_date("  2026-02-05  "), Some(date(2026, 2, 5)));
    }

    #[test]
    fn test_parse_seed_format() {
        assert_eq!(parse_trip_date("Dec 15, 2024"), Some(date(2024, 12, 15)));
        assert_eq!(parse_trip_date("Feb 05, 2026"), Some(date(2026, 2, 5)));
    }

    #[test]
    fn test_parse_browser_format() {
        assert_eq!(
            parse_trip_date("Fri Jan 02 2026 00:00:00 GMT+0530 (India Standard Time)"),
            Some(date(2026, 1, 2))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_trip_date(""), None);
        assert_eq!(parse_trip_date("next tuesday"), None);
        assert_eq!(parse_trip_date("2026-13-45"), None);
    }

    #[test]
    fn test_status_boundaries_are_inclusive() {
        let today = date(2026, 1, 10);
        assert_eq!(
            derive_status("2026-01-10", "2026-01-10", today),
            TripStatus::Ongoing
        );
        assert_eq!(
            derive_status("2026-01-01", "2026-01-10", today),
            TripStatus::Ongoing
        );
        assert_eq!(
            derive_status("2026-01-10", "2026-01-20", today),
            TripStatus::Ongoing
        );
        assert_eq!(
            derive_status("2026-01-01", "2026-01-09", today),
            TripStatus::Completed
        );
        assert_eq!(
            derive_status("2026-01-11", "2026-01-20", today),
            TripStatus::Upcoming
        );
    }

    #[test]
    fn test_status_with_unreadable_dates() {
        let today = date(2026, 1, 10);
        assert_eq!(derive_status("soon", "later", today), TripStatus::Upcoming);
        // A readable past end date still completes the trip
        assert_eq!(
            derive_status("soon", "2025-12-31", today),
            TripStatus::Completed
        );
        assert_eq!(
            derive_status("2026-01-01", "later", today),
            TripStatus::Upcoming
        );
    }
}
