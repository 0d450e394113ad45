use crate::core::pipeline::Listing;
use crate::utils::media::{clean_file_id, download_link, view_link};
use crate::utils::table::{Column, TableRow};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    pub subject: String,
    pub name: String,
    pub file_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectCount {
    pub name: String,
    pub count: usize,
}

impl Note {
    pub fn view_link(&self) -> String {
        view_link(&self.file_id)
    }

    pub fn download_link(&self) -> String {
        download_link(&self.file_id)
    }
}

/// Distinct trimmed subjects with their note counts, ordered by name
/// (case-insensitive, ties broken on the raw name).
pub fn subject_index(notes: &[Note]) -> Vec<SubjectCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for note in notes {
        let sub = note.subject.trim();
        if !sub.is_empty() {
            *counts.entry(sub.to_string()).or_default() += 1;
        }
    }

    let mut out: Vec<SubjectCount> = counts
        .into_iter()
        .map(|(name, count)| SubjectCount { name, count })
        .collect();
    out.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    out
}

impl Listing for Note {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn facets() -> &'static [&'static str] {
        &["subject"]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "subject" => Some(self.subject.trim()),
            _ => None,
        }
    }
}

impl TableRow for Note {
    fn columns() -> Vec<Column> {
        vec![
            Column::new("Name", 34),
            Column::new("Subject", 16),
            Column::new("Download", 70),
        ]
    }

    fn cells(&self) -> Vec<String> {
        let link = if clean_file_id(&self.file_id).is_empty() {
            String::new()
        } else {
            self.download_link()
        };
        vec![self.name.clone(), self.subject.trim().to_string(), link]
    }
}
