use super::{DATE_FORMAT, Entity, Record, RowStyle, date_value, get_date, text};
use crate::utils::formatting::format_currency;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Client {
    pub id: String, // C + 3 digits
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
    pub project: String, // free text, not a foreign key
    pub invoice_amount: f64,
    pub deadline: NaiveDate,
    pub created_at: String,
    pub updated_at: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Client {
    const ENTITY: Entity = Entity::Client;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "last_name",
        "first_name",
        "phone",
        "email",
        "project",
        "invoice_amount",
        "deadline",
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Last Name",
        "First Name",
        "Phone",
        "Email",
        "Project",
        "Invoice Amount",
        "Deadline",
    ];
    const TIMESTAMPED: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Client {
            id: row.get("id")?,
            last_name: row.get("last_name")?,
            first_name: row.get("first_name")?,
            phone: row.get("phone")?,
            email: row.get("email")?,
            project: row.get("project")?,
            invoice_amount: row.get("invoice_amount")?,
            deadline: get_date(row, "deadline")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.last_name),
            text(&self.first_name),
            text(&self.phone),
            text(&self.email),
            text(&self.project),
            Value::Real(self.invoice_amount),
            date_value(&self.deadline),
        ]
    }

    fn display_row(&self, style: &RowStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.last_name.clone(),
            self.first_name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.project.clone(),
            format_currency(self.invoice_amount, &style.currency),
            self.deadline.format(DATE_FORMAT).to_string(),
        ]
    }

    fn timestamps(&self) -> Option<(&str, &str)> {
        Some((&self.created_at, &self.updated_at))
    }
}
