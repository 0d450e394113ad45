use crate::core::pipeline::{Listing, SortOrder};
use crate::utils::date::day_badge;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DutyLeave {
    pub date: String,
    pub title: String,
    pub description: String,
    pub venue: String,
    pub time: String,
}

impl Listing for DutyLeave {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn sort_key(&self) -> Option<&str> {
        Some(self.date.as_str())
    }

    fn default_order() -> Option<SortOrder> {
        Some(SortOrder::Desc)
    }
}

impl TableRow for DutyLeave {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Date", 8),
            Column::new("Title", 30),
            Column::new("Venue", 18),
            Column::new("Time", 10),
            Column::new("Description", 32),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            day_badge(&self.date),
            self.title.clone(),
            self.venue.clone(),
            self.time.clone(),
            self.description.clone(),
        ]
    }
}
