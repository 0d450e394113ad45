//! Calendar export for a single event: a minimal ICS payload and a
//! hosted-calendar quick-add link.

use crate::errors::{AppError, AppResult};
use crate::models::Event;
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};

const QUICK_ADD_BASE: &str = "https://www.google.com/calendar/render";

/// `YYYY-MM-DD` + `HH:MM` → `YYYYMMDDTHHMM00Z`.
/// Dashes are dropped from the date; colons and whitespace from the time,
/// which is then cut to four characters.
pub fn format_calendar_date(date: &str, time: &str) -> String {
    let clean_date = date.replace('-', "");
    let clean_time: String = time
        .chars()
        .filter(|c| *c != ':' && !c.is_whitespace())
        .take(4)
        .collect();
    format!("{clean_date}T{clean_time}00Z")
}

/// ICS text for the event, lines joined with `\n`.
pub fn ics_content(event: &Event) -> String {
    let start = format_calendar_date(&event.date, &event.time);
    [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART:{start}"),
        format!("DTEND:{start}"),
        format!("SUMMARY:{}", event.title),
        format!("DESCRIPTION:{}", event.description.replace('\n', "\\n")),
        format!("LOCATION:{}", event.venue),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
    .join("\n")
}

/// Download name: whitespace runs in the title become `_`.
pub fn ics_filename(event: &Event) -> String {
    let stem = event.title.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = if stem.is_empty() { "event".to_string() } else { stem };
    format!("{stem}.ics")
}

/// Write the ICS file. A directory target receives the default file name.
pub fn write_ics(event: &Event, target: &Path) -> AppResult<PathBuf> {
    let path = if target.is_dir() {
        target.join(ics_filename(event))
    } else {
        target.to_path_buf()
    };
    fs::write(&path, ics_content(event))?;
    Ok(path)
}

pub fn quick_add_url(event: &Event) -> AppResult<String> {
    let start = format_calendar_date(&event.date, &event.time);
    let dates = format!("{start}/{start}");
    let details = format!("{}\n\nOrganized by: {}", event.description, event.organizer);

    let url = Url::parse_with_params(
        QUICK_ADD_BASE,
        &[
            ("action", "TEMPLATE"),
            ("text", event.title.as_str()),
            ("dates", dates.as_str()),
            ("details", details.as_str()),
            ("location", event.venue.as_str()),
        ],
    )
    .map_err(|e| AppError::Other(format!("calendar link: {e}")))?;

    Ok(url.to_string())
}
