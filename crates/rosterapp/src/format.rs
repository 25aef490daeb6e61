//! Human display of the raw `createdAt` strings the server hands out.
//!
//! The server's timestamps are opaque strings. Anything that does not parse renders as an
//! empty string, never as the raw value.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;
use timeago::Formatter;

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Naive forms (no offset) are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Local calendar date, for table columns.
pub fn format_date(raw: &str) -> String {
    format_date_in(raw, &Local)
}

pub fn format_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format_in(raw, tz, "%Y-%m-%d")
}

/// Local date and time, for the detail view.
pub fn format_datetime(raw: &str) -> String {
    format_datetime_in(raw, &Local)
}

pub fn format_datetime_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    format_in(raw, tz, "%Y-%m-%d %H:%M:%S")
}

/// "3 days ago". Timestamps in the future read as "now".
pub fn format_relative(raw: &str) -> String {
    format_relative_to(raw, Utc::now())
}

pub fn format_relative_to(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(ts) => {
            let elapsed = now.signed_duration_since(ts).to_std().unwrap_or_default();
            Formatter::new().convert(elapsed)
        }
        None => String::new(),
    }
}

fn format_in<Tz: TimeZone>(raw: &str, tz: &Tz, pattern: &str) -> String
where
    Tz::Offset: Display,
{
    parse_timestamp(raw)
        .map(|dt| dt.with_timezone(tz).format(pattern).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    #[test]
    fn parses_rfc3339_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T12:30:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T14:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01T12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-01 12:30:00"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn garbage_formats_as_empty() {
        assert_eq!(format_date("not a date"), "");
        assert_eq!(format_datetime(""), "");
        assert_eq!(format_relative("2024-13-45"), "");
    }

    #[test]
    fn formats_in_the_given_timezone() {
        let raw = "2024-03-01T23:30:00.000Z";
        assert_eq!(format_date_in(raw, &Utc), "2024-03-01");
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_date_in(raw, &plus_two), "2024-03-02");
        assert_eq!(format_datetime_in(raw, &plus_two), "2024-03-02 01:30:00");
    }

    #[test]
    fn relative_time_reads_naturally() {
        let raw = "2024-03-01T12:00:00.000Z";
        let now = parse_timestamp(raw).unwrap() + Duration::days(3);
        assert_eq!(format_relative_to(raw, now), "3 days ago");
    }
}
