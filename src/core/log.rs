use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::colors;
use ansi_term::Colour;
use regex::Regex;

/// Visible width of the `operation (target)` column.
const OP_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "notify" | "device" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)` cut to `max` visible chars, operation word coloured.
fn op_target_cell(entry: &LogEntry, max: usize) -> String {
    let visible = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let truncated = if visible.chars().count() > max {
        let mut s: String = visible.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    if !colors::enabled() {
        return truncated;
    }

    let color = color_for_operation(&entry.operation);
    match truncated.split_once(' ') {
        Some((word, rest)) => format!("{} {}", color.paint(word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool, limit: Option<usize>) -> AppResult<()> {
        let entries = load_entries(&pool.conn, limit)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let re = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| AppError::Other(e.to_string()))?;

        let dates: Vec<String> = entries
            .iter()
            .map(|e| {
                chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone())
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.chars().count() + e.target.chars().count() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH);

        println!("📜 Internal log:\n");

        for (entry, date) in entries.iter().zip(dates.iter()) {
            let cell = op_target_cell(entry, OP_WIDTH);
            // padding on the visible width, not the escaped one
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&re, &cell).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                cell,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(op: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2024-01-01T10:00:00+00:00".into(),
            operation: op.into(),
            target: target.into(),
            message: "m".into(),
        }
    }

    #[test]
    fn long_targets_are_truncated_on_visible_text() {
        let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
        let long = "x".repeat(100);
        let cell = op_target_cell(&entry("backup", &long), OP_WIDTH);
        let visible = strip_ansi(&re, &cell);
        assert_eq!(visible.chars().count(), OP_WIDTH);
        assert!(visible.starts_with("backup ("));
        assert!(visible.ends_with("..."));
    }

    #[test]
    fn empty_target_shows_operation_only() {
        let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
        let cell = op_target_cell(&entry("init", ""), OP_WIDTH);
        assert_eq!(strip_ansi(&re, &cell), "init");
    }
}
