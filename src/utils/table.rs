//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

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

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = self.columns.get(i).map(|c| c.width).unwrap_or(cell.len());
                out.push_str(&pad(cell, width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

/// Pad to a display width (not a byte count), truncating overlong cells.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        let mut taken = String::new();
        for ch in s.chars() {
            if UnicodeWidthStr::width(taken.as_str()) >= width {
                break;
            }
            taken.push(ch);
        }
        taken
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
