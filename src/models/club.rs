use crate::core::pipeline::Listing;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Club {
    pub id: String,
    pub logo_link: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub form_link: String,
    pub contact_info: String,
    pub meeting_times: String,
}

impl Listing for Club {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
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

impl TableRow for Club {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name", 28),
            Column::new("Category", 16),
            Column::new("Meets", 20),
            Column::new("Contact", 24),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            self.meeting_times.clone(),
            self.contact_info.clone(),
        ]
    }
}
