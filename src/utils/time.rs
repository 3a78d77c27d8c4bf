//! Time utilities

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Parse a datetime string in RFC 3339 format
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

/// Parse an ISO 8601 date.
///
/// Accepts calendar dates (`2025-12-01`), reduced precision (`2025-12`,
/// `2025`, resolving to the first day), and timestamps with `T` or a space
/// before the time, with or without an offset. Offset timestamps are converted
/// to UTC first. Only the date part is kept.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(date) = parse_reduced_date(s) {
        return Some(date);
    }

    let s = with_t_separator(s)?;
    if let Some(dt) = parse_datetime(&s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.date())
        .ok()
}

/// `YYYY-MM` or `YYYY`
fn parse_reduced_date(s: &str) -> Option<NaiveDate> {
    let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());

    let (year, month) = match s.split_once('-') {
        Some((year, month)) if digits(month, 2) => (year, month.parse().ok()?),
        Some(_) => return None,
        None => (s, 1),
    };
    if !digits(year, 4) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Normalize `YYYY-MM-DD hh:mm..` to `YYYY-MM-DDThh:mm..`; `None` when no time follows the date
fn with_t_separator(s: &str) -> Option<String> {
    match s.as_bytes().get(10)? {
        b' ' => Some(format!("{}T{}", &s[..10], &s[11..])),
        b'T' | b't' => Some(s.to_string()),
        _ => None,
    }
}

/// Check if a date lies strictly before today (UTC)
pub fn is_past_date(date: NaiveDate) -> bool {
    date < now_utc().date_naive()
}
