use crate::core::pipeline::Listing;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub contact: String,
    pub image_url: String,
    pub category: String,
    pub tags: String,
    pub rating: String,
    pub location: String,
    pub condition: String,
    pub seller_name: String,
}

impl Listing for Deal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.tags.as_str()]
    }

    fn facets() -> &'static [&'static str] {
        &["category", "condition"]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            "condition" => Some(self.condition.as_str()),
            _ => None,
        }
    }
}

impl TableRow for Deal {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Title", 28),
            Column::new("Price", 10),
            Column::new("Category", 14),
            Column::new("Condition", 10),
            Column::new("Seller", 16),
            Column::new("Contact", 14),
        ]
    }

    fn cells(&self) -> Vec<String> {
        let price = if self.price.trim().is_empty() {
            String::new()
        } else {
            format!("₹{}", self.price.trim())
        };
        vec![
            self.title.clone(),
            price,
            self.category.clone(),
            self.condition.clone(),
            self.seller_name.clone(),
            self.contact.clone(),
        ]
    }
}
