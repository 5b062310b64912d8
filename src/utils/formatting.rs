//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut a string to `max` visible columns, ending with "..." when truncated.
pub fn truncate(s: &str, max: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + cw + 3 > max {
            break;
        }
        out.push(ch);
        width += cw;
    }
    out.push_str("...");
    out
}

/// Strip currency decoration from a user supplied amount.
///
/// `"$25,000"` → `"25000"`. Spaces (including the narrow no-break space used
/// by some locales) and common currency signs are removed too.
pub fn clean_amount_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '€' | '£' | ' ' | '\u{a0}' | '\u{202f}'))
        .collect()
}

/// Parse a formatted money cell back to a number.
///
/// `symbol` is the configured currency symbol, which may be any text
/// (`"DT "`, `"CHF"`, `"R$"`). It is removed before the usual cleanup.
pub fn parse_money(cell: &str, symbol: &str) -> Option<f64> {
    let symbol = symbol.trim();
    let bare = if symbol.is_empty() {
        cell.to_string()
    } else {
        cell.replacen(symbol, "", 1)
    };
    let cleaned = clean_amount_input(&bare);
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `25000.0` → `"$25,000.00"`. Negative values keep the sign in front.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!(
        "{}{}{}.{:02}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        frac
    )
}
