use crate::core::pipeline::{Listing, SortOrder, sort_chronologically};
use crate::utils::table::{Column, TableRow};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(mp4|webm|ogg)$|drive\.google\.com.*video").expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub media_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
}

impl Notification {
    pub fn has_video(&self) -> bool {
        !self.media_url.is_empty() && VIDEO_URL.is_match(&self.media_url)
    }
}

/// Most recent notifications first, unparseable timestamps last.
pub fn latest(feed: &[Notification], n: usize) -> Vec<Notification> {
    let mut sorted = feed.to_vec();
    sort_chronologically(&mut sorted, SortOrder::Desc);
    sorted.truncate(n);
    sorted
}

impl Listing for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn facets() -> &'static [&'static str] {
        &["category"]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }

    fn sort_key(&self) -> Option<&str> {
        Some(self.timestamp.as_str())
    }

    fn default_order() -> Option<SortOrder> {
        Some(SortOrder::Desc)
    }
}

impl TableRow for Notification {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("When", 19),
            Column::new("Category", 14),
            Column::new("Title", 30),
            Column::new("Description", 40),
            Column::new("Media", 5),
        ]
    }

    fn cells(&self) -> Vec<String> {
        let media = if self.has_video() {
            "video"
        } else if self.media_url.trim().is_empty() {
            ""
        } else {
            "image"
        };
        vec![
            self.timestamp.clone(),
            self.category.clone(),
            self.title.clone(),
            self.description.clone(),
            media.to_string(),
        ]
    }
}
