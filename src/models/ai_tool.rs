use crate::core::pipeline::Listing;
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTool {
    pub tool_name: String,
    pub description: String,
    pub category: String,
    pub logo_url: String,
    pub tool_url: String,
}

impl Listing for AiTool {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.tool_name.as_str(), self.description.as_str()]
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

impl TableRow for AiTool {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Tool", 22),
            Column::new("Category", 16),
            Column::new("Description", 36),
            Column::new("Link", 30),
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.tool_name.clone(),
            self.category.clone(),
            self.description.clone(),
            self.tool_url.clone(),
        ]
    }
}
