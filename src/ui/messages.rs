use crate::utils::colors;
use std::fmt;

/// ANSI styles
const BOLD: &str = "\x1b[1m";
const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn styled(color: &str, icon: &str) -> String {
    if colors::enabled() {
        format!("{}{}{} {}", color, BOLD, icon, colors::RESET)
    } else {
        format!("{} ", icon)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}", styled(FG_BLUE, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}", styled(FG_GREEN, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}", styled(FG_YELLOW, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}", styled(FG_RED, ICON_ERR), msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {}", msg);
    if colors::enabled() {
        println!("{}{}{}{}", FG_BLUE, BOLD, line, colors::RESET);
    } else {
        println!("{}", line);
    }
}
