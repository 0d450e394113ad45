//! CSV text → typed rows.

use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

static HEADER_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,]+").expect("valid regex"));

/// `trim → lowercase → runs of whitespace/commas → "_"`.
/// A UTF-8 byte order mark in front of the first header is dropped.
pub fn normalize_header(raw: &str) -> String {
    let lowered = raw.trim_start_matches('\u{feff}').trim().to_lowercase();
    HEADER_SEPARATORS.replace_all(&lowered, "_").into_owned()
}

/// Rows that parsed, plus a warning for each row that did not.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<R> {
    pub rows: Vec<R>,
    pub warnings: Vec<String>,
}

/// Parse CSV text with a header row.
///
/// Rows whose cell count differs from the header are skipped, as are rows
/// that fail to deserialize. Rows where every cell is blank are dropped
/// silently.
pub fn parse_csv<R: DeserializeOwned>(text: &str) -> Result<Parsed<R>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: StringRecord = rdr.headers()?.iter().map(normalize_header).collect();

    let mut rows = Vec::new();
    let mut warnings = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warnings.push(format!("row {line}: {e}"));
                continue;
            }
        };

        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        if record.len() != headers.len() {
            warnings.push(format!(
                "row {line}: expected {} fields, found {}",
                headers.len(),
                record.len()
            ));
            continue;
        }

        match record.deserialize::<R>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => warnings.push(format!("row {line}: {e}")),
        }
    }

    Ok(Parsed { rows, warnings })
}
