//! Record types managed by bizdesk and the trait that lets the persistence,
//! listing, chart and export layers handle all of them generically.

pub mod client;
pub mod employee;
pub mod entity;
pub mod invoice;
pub mod material;
pub mod project;
pub mod status;
pub mod task;

pub use client::Client;
pub use employee::Employee;
pub use entity::Entity;
pub use invoice::Invoice;
pub use material::Material;
pub use project::Project;
pub use task::Task;

use crate::errors::AppError;
use crate::i18n::Language;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::{Type, Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a record is turned into display cells.
#[derive(Debug, Clone)]
pub struct RowStyle {
    pub currency: String,
    pub lang: Language,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            lang: Language::En,
        }
    }
}

/// One row of one table, addressed by a string primary key.
pub trait Record: Sized {
    const ENTITY: Entity;

    /// Persisted columns, primary key first. Order matches `values()`.
    const COLUMNS: &'static [&'static str];

    /// Display headers (English). Order matches `display_row()`.
    const HEADERS: &'static [&'static str];

    /// Whether the table carries SQL-maintained created_at / updated_at.
    const TIMESTAMPED: bool = false;

    fn id(&self) -> &str;

    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    fn values(&self) -> Vec<Value>;

    fn display_row(&self, style: &RowStyle) -> Vec<String>;

    /// (created_at, updated_at) for timestamped tables.
    fn timestamps(&self) -> Option<(&str, &str)> {
        None
    }
}

pub(crate) fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

pub(crate) fn date_value(d: &NaiveDate) -> Value {
    Value::Text(d.format(DATE_FORMAT).to_string())
}

pub(crate) fn optional_text(s: &Option<String>) -> Value {
    match s {
        Some(v) if !v.trim().is_empty() => Value::Text(v.clone()),
        _ => Value::Null,
    }
}

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

/// Read a `YYYY-MM-DD` text column.
pub(crate) fn get_date(row: &Row, col: &str) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| conversion_error(AppError::InvalidDate(raw.clone())))
}

/// Read a vocabulary column through its parser.
pub(crate) fn get_parsed<T>(
    row: &Row,
    col: &str,
    parse: fn(&str) -> Option<T>,
) -> rusqlite::Result<T> {
    let raw: String = row.get(col)?;
    parse(&raw).ok_or_else(|| {
        conversion_error(AppError::validation(col, format!("unexpected value '{}' in database", raw)))
    })
}
