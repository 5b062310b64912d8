use super::status::InvoiceStatus;
use super::{DATE_FORMAT, Entity, Record, RowStyle, date_value, get_date, get_parsed, text};
use crate::i18n::tr;
use crate::utils::formatting::format_currency;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub number: String,  // INV-YYYY-NNN
    pub date: NaiveDate, // ⇔ invoices.date (TEXT "YYYY-MM-DD")
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl Record for Invoice {
    const ENTITY: Entity = Entity::Invoice;
    const COLUMNS: &'static [&'static str] = &["id", "number", "date", "amount", "status"];
    const HEADERS: &'static [&'static str] = &["ID", "Number", "Date", "Amount", "Status"];

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Invoice {
            id: row.get("id")?,
            number: row.get("number")?,
            date: get_date(row, "date")?,
            amount: row.get("amount")?,
            status: get_parsed(row, "status", InvoiceStatus::parse)?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.number),
            date_value(&self.date),
            Value::Real(self.amount),
            text(self.status.as_str()),
        ]
    }

    fn display_row(&self, style: &RowStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.number.clone(),
            self.date.format(DATE_FORMAT).to_string(),
            format_currency(self.amount, &style.currency),
            tr(style.lang, self.status.as_str()),
        ]
    }
}
