use crate::core::detail::{Identified, stable_id};
use crate::core::pipeline::{Listing, SortOrder};
use crate::utils::date::day_badge;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub price: String,
    pub organizer: String,
}

impl Event {
    /// "Free" for zero or free entry, "TBA" when blank, rupees otherwise.
    pub fn price_label(&self) -> String {
        let p = self.price.trim();
        if p.is_empty() {
            "TBA".to_string()
        } else if p == "0" || p.eq_ignore_ascii_case("free") {
            "Free".to_string()
        } else {
            format!("₹{p}")
        }
    }
}

impl Identified for Event {
    fn stable_id(&self) -> String {
        stable_id(&[self.title.as_str(), self.date.as_str()])
    }
}

impl Listing for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.organizer.as_str()]
    }

    fn sort_key(&self) -> Option<&str> {
        Some(self.date.as_str())
    }

    fn default_order() -> Option<SortOrder> {
        Some(SortOrder::Desc)
    }
}

impl TableRow for Event {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Date", 8),
            Column::new("Title", 34),
            Column::new("Venue", 20),
            Column::new("Price", 8),
            Column::new("Organizer", 20),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            day_badge(&self.date),
            self.title.clone(),
            self.venue.clone(),
            self.price_label(),
            self.organizer.clone(),
        ]
    }
}
