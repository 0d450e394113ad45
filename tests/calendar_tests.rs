use alfahub::core::calendar::{
    format_calendar_date, ics_content, ics_filename, quick_add_url, write_ics,
};
use alfahub::models::Event;
use std::env;
use std::fs;

fn hackathon() -> Event {
    Event {
        title: "Hackathon 2025".into(),
        description: "24h build\nBring laptops".into(),
        date: "2025-03-14".into(),
        time: "10:30".into(),
        venue: "Lab 3".into(),
        organizer: "Coding Club".into(),
        ..Default::default()
    }
}

#[test]
fn calendar_date_format() {
    assert_eq!(format_calendar_date("2025-03-14", "10:30"), "20250314T103000Z");
    assert_eq!(format_calendar_date("2025-03-14", " 09 : 05 "), "20250314T090500Z");
    // only the first four time characters survive
    assert_eq!(format_calendar_date("2025-03-14", "10:30:45"), "20250314T103000Z");
}

#[test]
fn ics_payload_layout() {
    let ics = ics_content(&hackathon());
    let lines: Vec<&str> = ics.split('\n').collect();

    assert_eq!(
        lines,
        vec![
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "BEGIN:VEVENT",
            "DTSTART:20250314T103000Z",
            "DTEND:20250314T103000Z",
            "SUMMARY:Hackathon 2025",
            "DESCRIPTION:24h build\\nBring laptops",
            "LOCATION:Lab 3",
            "END:VEVENT",
            "END:VCALENDAR",
        ]
    );
}

#[test]
fn ics_file_name_replaces_whitespace() {
    assert_eq!(ics_filename(&hackathon()), "Hackathon_2025.ics");
    let untitled = Event::default();
    assert_eq!(ics_filename(&untitled), "event.ics");
}

#[test]
fn write_ics_into_a_directory_uses_the_default_name() {
    let mut dir = env::temp_dir();
    dir.push("alfahub_calendar_dir");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();

    let path = write_ics(&hackathon(), &dir).unwrap();

    assert_eq!(path, dir.join("Hackathon_2025.ics"));
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("SUMMARY:Hackathon 2025"));
}

#[test]
fn quick_add_link_encodes_event_fields() {
    let url = quick_add_url(&hackathon()).unwrap();

    assert!(url.starts_with("https://www.google.com/calendar/render?action=TEMPLATE"));
    assert!(url.contains("text=Hackathon+2025"));
    assert!(url.contains("dates=20250314T103000Z%2F20250314T103000Z"));
    assert!(url.contains("location=Lab+3"));
    assert!(url.contains("Organized+by%3A+Coding+Club"));
}
