use crate::core::pipeline::Listing;
use crate::utils::media::youtube_id;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YouTubeChannel {
    pub category: String,
    pub subject: String,
    pub title: String,
    pub url: String,
}

impl Listing for YouTubeChannel {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.subject.as_str(), self.category.as_str()]
    }

    fn facets() -> &'static [&'static str] {
        &["category", "subject"]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            "subject" => Some(self.subject.as_str()),
            _ => None,
        }
    }
}

impl TableRow for YouTubeChannel {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Title", 30),
            Column::new("Subject", 18),
            Column::new("Category", 14),
            Column::new("Video", 12),
            Column::new("URL", 30),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.subject.clone(),
            self.category.clone(),
            youtube_id(&self.url).unwrap_or_default(),
            self.url.clone(),
        ]
    }
}
