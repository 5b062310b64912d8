//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{self, CYAN};
use crate::utils::formatting::{pad_right, truncate};
use unicode_width::UnicodeWidthStr;

const MAX_COL_WIDTH: usize = 32;

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths from header + content, capped at MAX_COL_WIDTH.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.width());
            }
        }
        widths.into_iter().map(|w| w.min(MAX_COL_WIDTH)).collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header_line: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad_right(&truncate(h, *w), *w))
            .collect();
        out.push_str(&colors::paint(CYAN, header_line.join(" │ ").trim_end()));
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&rule.join("─┼─"));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let raw = row.get(i).map(String::as_str).unwrap_or("");
                    let shown = if raw.trim().is_empty() {
                        "--".to_string()
                    } else {
                        truncate(raw, *w)
                    };
                    let padding = " ".repeat(w.saturating_sub(shown.width()));
                    format!("{}{}", colors::colorize_cell(raw, &shown), padding)
                })
                .collect();
            out.push_str(cells.join(" │ ").trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_aligns_columns() {
        colors::set_enabled(false);
        let mut t = Table::new(vec!["ID".into(), "Name".into()]);
        t.add_row(vec!["001".into(), "Cement".into()]);
        t.add_row(vec!["0002".into(), "".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID   │ Name");
        assert_eq!(lines[2], "001  │ Cement");
        assert_eq!(lines[3], "0002 │ --");
    }
}
