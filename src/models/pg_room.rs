use crate::core::detail::{Identified, stable_id};
use crate::core::pipeline::Listing;
use crate::utils::media::{direct_image_url, split_media_urls, video_preview_url};
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PgRoom {
    pub name: String,
    pub address: String,
    pub rent: String,
    /// The sheet keeps the owner's contact numbers in this column.
    pub kitchen_security_ac: String,
    pub amenities: String,
    pub image_urls: String,
    pub video_urls: String,
    pub location_url: String,
    pub description: String,
    pub pg_type: String,
    pub rating: String,
    pub total_capacity: String,
    pub current_occupancy: String,
    pub is_looking_for_roommate: String,
    pub roommate_message: String,
    pub roommate_preferences: String,
    pub move_in_date: String,
    pub roommate_contact_number: String,
}

/// Leading integer of a cell ("12 beds" → 12), 0 when there is none.
fn leading_int(cell: &str) -> i64 {
    let t = cell.trim();
    let (sign, digits) = match t.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, t.strip_prefix('+').unwrap_or(t)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

impl PgRoom {
    pub fn free_beds(&self) -> u32 {
        let free = leading_int(&self.total_capacity) - leading_int(&self.current_occupancy);
        u32::try_from(free.max(0)).unwrap_or(u32::MAX)
    }

    pub fn looking_for_roommate(&self) -> bool {
        self.is_looking_for_roommate.trim().eq_ignore_ascii_case("true")
    }

    pub fn contact(&self) -> &str {
        &self.kitchen_security_ac
    }

    pub fn images(&self) -> Vec<String> {
        split_media_urls(&self.image_urls)
            .iter()
            .map(|u| direct_image_url(u))
            .collect()
    }

    pub fn videos(&self) -> Vec<String> {
        split_media_urls(&self.video_urls)
            .iter()
            .map(|u| video_preview_url(u))
            .collect()
    }
}

impl Identified for PgRoom {
    fn stable_id(&self) -> String {
        stable_id(&[self.name.as_str(), self.address.as_str()])
    }
}

impl Listing for PgRoom {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }

    fn facets() -> &'static [&'static str] {
        &["pg_type"]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "pg_type" => Some(self.pg_type.as_str()),
            _ => None,
        }
    }
}

impl TableRow for PgRoom {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name", 24),
            Column::new("Type", 10),
            Column::new("Rent", 10),
            Column::new("Free", 5),
            Column::new("Rating", 6),
            Column::new("Address", 32),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.pg_type.clone(),
            self.rent.clone(),
            self.free_beds().to_string(),
            self.rating.clone(),
            self.address.clone(),
        ]
    }
}
