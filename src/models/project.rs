use super::status::ProjectStatus;
use super::{DATE_FORMAT, Entity, Record, RowStyle, date_value, get_date, get_parsed, text};
use crate::i18n::tr;
use crate::utils::formatting::format_currency;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

/// A project. `client_name` / `client_email` are free text; there is no
/// link to the clients table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ProjectStatus,
    pub budget: f64,
    pub client_name: String,
    pub location: String,
}

impl Record for Project {
    const ENTITY: Entity = Entity::Project;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "client_email",
        "start_date",
        "end_date",
        "status",
        "budget",
        "client_name",
        "location",
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Client Email",
        "Start Date",
        "End Date",
        "Status",
        "Budget",
        "Client Name",
        "Location",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Project {
            id: row.get("id")?,
            name: row.get("name")?,
            client_email: row.get("client_email")?,
            start_date: get_date(row, "start_date")?,
            end_date: get_date(row, "end_date")?,
            status: get_parsed(row, "status", ProjectStatus::parse)?,
            budget: row.get("budget")?,
            client_name: row.get("client_name")?,
            location: row.get("location")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.name),
            text(&self.client_email),
            date_value(&self.start_date),
            date_value(&self.end_date),
            text(self.status.as_str()),
            Value::Real(self.budget),
            text(&self.client_name),
            text(&self.location),
        ]
    }

    fn display_row(&self, style: &RowStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.client_email.clone(),
            self.start_date.format(DATE_FORMAT).to_string(),
            self.end_date.format(DATE_FORMAT).to_string(),
            tr(style.lang, self.status.as_str()),
            format_currency(self.budget, &style.currency),
            self.client_name.clone(),
            self.location.clone(),
        ]
    }
}
