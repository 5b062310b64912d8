// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

/// Interpret a cell as a date or a timestamp, returning the Excel serial
/// and the number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let dt_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive_datetime_to_excel_serial(&dt).map(|serial| ("yyyy-mm-dd hh:mm", serial));
        }
    }

    // exactly YYYY-MM-DD: chrono would also take "2024-3-5"
    if s.len() == 10
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
    {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return naive_datetime_to_excel_serial(&dt).map(|serial| ("yyyy-mm-dd", serial));
    }

    None
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
