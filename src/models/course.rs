use crate::core::pipeline::Listing;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub course_url: String,
}

impl Listing for Course {
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
}

impl TableRow for Course {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Title", 32),
            Column::new("Category", 16),
            Column::new("Link", 44),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.category.clone(),
            self.course_url.clone(),
        ]
    }
}
