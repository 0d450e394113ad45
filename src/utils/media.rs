//! Link conventions of the hosted drive and video services.
//!
//! Sheet cells hold whatever the editors pasted: share links, raw file ids,
//! quoted strings, several URLs in one cell. These helpers turn them into
//! direct URLs.

use regex::Regex;
use std::sync::LazyLock;

static DRIVE_PATH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]{25,})").expect("valid regex"));
static DRIVE_QUERY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]{25,})").expect("valid regex"));
static DRIVE_OPEN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/open\?id=([a-zA-Z0-9_-]{25,})").expect("valid regex"));
static DRIVE_ANY_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"id=([a-zA-Z0-9_-]{25,})").expect("valid regex"));
static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").expect("valid regex")
});
static MEDIA_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,\s]+").expect("valid regex"));

const DRIVE: &str = "https://drive.google.com";
const VIDEO_PLACEHOLDER: &str = "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=800";

fn strip_quotes(raw: &str) -> String {
    raw.trim().replace(['\'', '"'], "")
}

/// Extract a drive file id from a share link.
pub fn drive_file_id(link: &str) -> Option<String> {
    [&*DRIVE_PATH_ID, &*DRIVE_QUERY_ID, &*DRIVE_OPEN_ID]
        .iter()
        .find_map(|re| re.captures(link))
        .map(|c| c[1].to_string())
}

/// Resolve a share link or raw id into a direct thumbnail URL.
/// Anything that looks like neither is returned unchanged.
pub fn direct_image_url(raw: &str) -> String {
    let clean = strip_quotes(raw);
    if clean.is_empty() {
        return clean;
    }
    if let Some(id) = drive_file_id(&clean) {
        return format!("{DRIVE}/thumbnail?id={id}&sz=w1000");
    }
    if clean.len() > 20 && !clean.contains('/') && !clean.contains('.') {
        return format!("{DRIVE}/thumbnail?id={clean}&sz=w1000");
    }
    clean
}

/// Normalize a note's `file_id` cell into a bare drive id.
pub fn clean_file_id(raw: &str) -> String {
    let clean = strip_quotes(raw);
    if clean.contains("drive.google.com") {
        let found = DRIVE_PATH_ID
            .captures(&clean)
            .or_else(|| DRIVE_ANY_ID.captures(&clean))
            .map(|c| c[1].to_string());
        if let Some(id) = found {
            return id;
        }
    }
    clean
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn view_link(file_id: &str) -> String {
    format!("{DRIVE}/file/d/{}/view", clean_file_id(file_id))
}

pub fn download_link(file_id: &str) -> String {
    format!("{DRIVE}/uc?export=download&id={}", clean_file_id(file_id))
}

/// Embeddable preview for drive-hosted videos, other URLs pass through.
pub fn video_preview_url(url: &str) -> String {
    match DRIVE_PATH_ID.captures(url) {
        Some(c) if url.contains("/d/") => format!("{DRIVE}/file/d/{}/preview", &c[1]),
        _ => url.to_string(),
    }
}

/// Split a multi-URL cell; fragments of 10 chars or less are noise.
pub fn split_media_urls(cell: &str) -> Vec<String> {
    MEDIA_SPLIT
        .split(cell)
        .map(str::trim)
        .filter(|u| u.len() > 10)
        .map(str::to_string)
        .collect()
}

/// 11-character video id of a YouTube link.
pub fn youtube_id(url: &str) -> Option<String> {
    let caps = YOUTUBE_ID.captures(url)?;
    let id = caps.get(2)?.as_str();
    (id.len() == 11).then(|| id.to_string())
}

pub fn youtube_thumbnail(url: &str) -> String {
    match youtube_id(url) {
        Some(id) => format!("https://img.youtube.com/vi/{id}/mqdefault.jpg"),
        None => VIDEO_PLACEHOLDER.to_string(),
    }
}
