use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Date-time layouts seen in the published sheets (form timestamps, manual entries).
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date-like sheet cell into a point in time.
/// Date-only values resolve to midnight. Returns `None` for anything else.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
    {
        return Some(dt);
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// Short "15 Jan" badge used in listings, falls back to the raw text.
pub fn day_badge(s: &str) -> String {
    match parse_timestamp(s) {
        Some(dt) => format!("{:02} {}", dt.day(), dt.format("%b")),
        None => s.trim().to_string(),
    }
}
