//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_right, truncate};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

/// A record that knows how to lay itself out as a table row.
pub trait TableRow {
    fn columns() -> Vec<Column>;
    fn cells(&self) -> Vec<String>;
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table with a leading `#` column holding each row's position.
    pub fn indexed<T: TableRow>(items: &[(usize, T)]) -> Self {
        let mut columns = vec![Column::new("#", 4)];
        columns.extend(T::columns());
        let mut table = Self::new(columns);
        for (idx, item) in items {
            let mut row = vec![idx.to_string()];
            row.extend(item.cells());
            table.add_row(row);
        }
        table
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(&truncate(cell, col.width), col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
