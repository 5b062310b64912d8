/// ANSI color helper utilities for terminal output.
use std::sync::atomic::{AtomicBool, Ordering};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn colored output on or off for the whole process.
/// `NO_COLOR` in the environment always wins.
pub fn set_enabled(enabled: bool) {
    let allowed = std::env::var_os("NO_COLOR").is_none();
    COLOR_ENABLED.store(enabled && allowed, Ordering::Relaxed);
}

pub fn enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// Wrap `value` in `color` when colors are enabled.
pub fn paint(color: &str, value: &str) -> String {
    if enabled() {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Color used for a status / priority cell.
/// Matches both English and French labels.
pub fn color_for_value(value: &str) -> Option<&'static str> {
    match value {
        "Paid" | "Payé" | "Completed" | "Terminé" | "Low" | "Basse" => Some(GREEN),
        "Pending" | "En attente" | "In Progress" | "En cours" | "Medium" | "Moyenne" => {
            Some(YELLOW)
        }
        "Overdue" | "En retard" | "High" | "Haute" => Some(RED),
        "On Hold" | "En pause" | "Planned" | "Planifié" | "To Do" | "À faire" => Some(CYAN),
        _ => None,
    }
}

/// Grey for empty cells, vocabulary color for known values.
/// `raw` decides the color, `shown` is what gets printed.
pub fn colorize_cell(raw: &str, shown: &str) -> String {
    if raw.trim().is_empty() {
        return paint(GREY, shown);
    }
    match color_for_value(raw) {
        Some(c) => paint(c, shown),
        None => shown.to_string(),
    }
}
