use crate::models::DATE_FORMAT;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// `"2024-03-17"` → `Some("2024-03")`.
pub fn month_key(cell: &str) -> Option<String> {
    parse_date(cell).map(|d| d.format("%Y-%m").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_from_date_cell() {
        assert_eq!(month_key("2024-03-17").as_deref(), Some("2024-03"));
        assert_eq!(month_key("17/03/2024"), None);
    }

    #[test]
    fn days_between_is_signed() {
        let a = parse_date("2024-01-01").unwrap();
        let b = parse_date("2024-01-31").unwrap();
        assert_eq!(days_between(a, b), 30);
        assert_eq!(days_between(b, a), -30);
    }
}
