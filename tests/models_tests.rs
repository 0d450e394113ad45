use alfahub::core::home::{QUOTES, quote_of_the_day};
use alfahub::models::emergency::{HOSTELS, dialable, search_hostels, search_safety};
use alfahub::models::note::subject_index;
use alfahub::models::notification::latest;
use alfahub::models::{Event, Note, Notification, PgRoom};
use alfahub::utils::media::{
    clean_file_id, direct_image_url, download_link, split_media_urls, video_preview_url,
    view_link, youtube_id, youtube_thumbnail,
};
use chrono::NaiveDate;

const FILE_ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz012345";

fn priced(p: &str) -> Event {
    Event {
        price: p.into(),
        ..Default::default()
    }
}

fn room(capacity: &str, occupancy: &str) -> PgRoom {
    PgRoom {
        total_capacity: capacity.into(),
        current_occupancy: occupancy.into(),
        ..Default::default()
    }
}

#[test]
fn event_price_labels() {
    assert_eq!(priced("0").price_label(), "Free");
    assert_eq!(priced("FREE").price_label(), "Free");
    assert_eq!(priced("").price_label(), "TBA");
    assert_eq!(priced("  ").price_label(), "TBA");
    assert_eq!(priced("150").price_label(), "₹150");
}

#[test]
fn pg_free_beds_never_go_negative() {
    assert_eq!(room("6", "4").free_beds(), 2);
    assert_eq!(room("4", "6").free_beds(), 0);
    assert_eq!(room("12 beds", "3 people").free_beds(), 9);
    assert_eq!(room("", "").free_beds(), 0);
    assert_eq!(room("n/a", "2").free_beds(), 0);
}

#[test]
fn roommate_flag_is_case_insensitive() {
    let mut r = PgRoom::default();
    for (cell, expected) in [("TRUE", true), ("true", true), (" True ", true), ("yes", false), ("", false)] {
        r.is_looking_for_roommate = cell.into();
        assert_eq!(r.looking_for_roommate(), expected, "cell {cell:?}");
    }
}

#[test]
fn pg_media_cells_expand_to_urls() {
    let r = PgRoom {
        image_urls: format!("https://drive.google.com/file/d/{FILE_ID}/view, tiny.png\nhttps://cdn.example/room.jpg"),
        video_urls: format!("https://drive.google.com/file/d/{FILE_ID}/view"),
        ..Default::default()
    };
    assert_eq!(
        r.images(),
        vec![
            format!("https://drive.google.com/thumbnail?id={FILE_ID}&sz=w1000"),
            "https://cdn.example/room.jpg".to_string(),
        ]
    );
    assert_eq!(
        r.videos(),
        vec![format!("https://drive.google.com/file/d/{FILE_ID}/preview")]
    );
}

#[test]
fn direct_image_urls() {
    let thumb = format!("https://drive.google.com/thumbnail?id={FILE_ID}&sz=w1000");
    assert_eq!(direct_image_url(&format!("https://drive.google.com/file/d/{FILE_ID}/view?usp=sharing")), thumb);
    assert_eq!(direct_image_url(&format!("https://drive.google.com/open?id={FILE_ID}")), thumb);
    assert_eq!(direct_image_url(&format!("\"{FILE_ID}\"")), thumb);
    assert_eq!(direct_image_url("https://cdn.example/a.png"), "https://cdn.example/a.png");
    assert_eq!(direct_image_url(""), "");
}

#[test]
fn note_file_ids_are_cleaned() {
    assert_eq!(clean_file_id(&format!("https://drive.google.com/file/d/{FILE_ID}/view")), FILE_ID);
    assert_eq!(clean_file_id(&format!("'{FILE_ID}?usp=sharing'")), FILE_ID);
    assert_eq!(clean_file_id("short#frag"), "short");
    assert_eq!(view_link(FILE_ID), format!("https://drive.google.com/file/d/{FILE_ID}/view"));
    let note = Note {
        file_id: format!("\"{FILE_ID}\""),
        ..Default::default()
    };
    assert_eq!(note.view_link(), view_link(FILE_ID));
    assert_eq!(note.download_link(), download_link(FILE_ID));
    assert_eq!(
        download_link(FILE_ID),
        format!("https://drive.google.com/uc?export=download&id={FILE_ID}")
    );
}

#[test]
fn media_split_drops_short_fragments() {
    assert_eq!(
        split_media_urls("https://a.example/1.jpg,,  x.png\n https://b.example/2.jpg"),
        vec!["https://a.example/1.jpg", "https://b.example/2.jpg"]
    );
    assert!(split_media_urls("").is_empty());
    assert_eq!(video_preview_url("https://v.example/clip.mp4"), "https://v.example/clip.mp4");
}

#[test]
fn youtube_ids_and_thumbnails() {
    assert_eq!(youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1").as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(youtube_id("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
    assert_eq!(youtube_id("https://youtu.be/short"), None);
    assert_eq!(
        youtube_thumbnail("https://youtu.be/dQw4w9WgXcQ"),
        "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg"
    );
    assert!(youtube_thumbnail("https://example.com").starts_with("https://images.unsplash.com/"));
}

#[test]
fn notification_video_detection() {
    let mut n = Notification::default();
    assert!(!n.has_video());
    n.media_url = "https://cdn.example/clip.MP4".into();
    assert!(n.has_video());
    n.media_url = "https://cdn.example/poster.png".into();
    assert!(!n.has_video());
}

#[test]
fn latest_notifications_newest_first_invalid_last() {
    let feed: Vec<Notification> = [("a", "2025-01-01"), ("b", "??"), ("c", "2025-03-01"), ("d", "2025-02-01")]
        .iter()
        .map(|(id, ts)| Notification {
            id: id.to_string(),
            timestamp: ts.to_string(),
            ..Default::default()
        })
        .collect();

    let top: Vec<String> = latest(&feed, 3).into_iter().map(|n| n.id).collect();
    assert_eq!(top, vec!["c", "d", "a"]);
    assert_eq!(latest(&feed, 10).last().map(|n| n.id.as_str()), Some("b"));
}

#[test]
fn subject_index_counts_trimmed_subjects() {
    let notes: Vec<Note> = [" physics", "Physics ", "chemistry", "Biology", ""]
        .iter()
        .map(|s| Note {
            subject: s.to_string(),
            ..Default::default()
        })
        .collect();

    let index: Vec<(String, usize)> = subject_index(&notes)
        .into_iter()
        .map(|s| (s.name, s.count))
        .collect();
    assert_eq!(
        index,
        vec![
            ("Biology".to_string(), 1),
            ("chemistry".to_string(), 1),
            ("Physics".to_string(), 1),
            ("physics".to_string(), 1),
        ]
    );
}

#[test]
fn emergency_directory_search_and_dialing() {
    assert_eq!(dialable("01824-444079 / 501227"), "01824-444079501227");
    assert_eq!(dialable("98765 43210"), "9876543210");

    let bh1 = search_hostels("bh-1");
    assert_eq!(bh1.len(), 1);
    assert_eq!(bh1[0].blocks.len(), 3);
    assert_eq!(search_hostels("").len(), HOSTELS.len());
    assert!(search_hostels("zzz").is_empty());

    let fire = search_safety("FIRE");
    assert_eq!(fire.len(), 2);
}

#[test]
fn quote_changes_by_day_and_wraps() {
    let jan1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let jan2 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
    let jan6 = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();

    assert_eq!(quote_of_the_day(jan1), QUOTES[0]);
    assert_eq!(quote_of_the_day(jan2), QUOTES[1]);
    assert_eq!(quote_of_the_day(jan6), QUOTES[0]);
}
