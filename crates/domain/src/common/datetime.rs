//! DateTime formatting and parsing for the wire format.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp as ISO-8601 UTC with millisecond precision.
///
/// This matches the shape browsers produce with `Date.toISOString()`, which
/// is what lobby clients expect.
///
/// # Examples
///
/// ```
/// use broadside_domain::common::format_iso8601;
/// use chrono::{TimeZone, Utc};
///
/// let dt = Utc.with_ymd_and_hms(2025, 3, 9, 8, 5, 0).unwrap();
/// assert_eq!(format_iso8601(dt), "2025-03-09T08:05:00.000Z");
/// ```
pub fn format_iso8601(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC3339 timestamp string, returning an error if parsing fails.
///
/// # Errors
///
/// Returns `chrono::ParseError` if the string is not valid RFC3339.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}
