use super::status::{TaskPriority, TaskStatus};
use super::{DATE_FORMAT, Entity, Record, RowStyle, date_value, get_date, get_parsed, text};
use crate::i18n::tr;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Task {
    pub id: String, // T + 3 digits
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub assigned_to: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Record for Task {
    const ENTITY: Entity = Entity::Task;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "status",
        "priority",
        "start_date",
        "end_date",
        "assigned_to",
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Description",
        "Status",
        "Priority",
        "Start Date",
        "End Date",
        "Assigned To",
    ];
    const TIMESTAMPED: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Task {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            status: get_parsed(row, "status", TaskStatus::parse)?,
            priority: get_parsed(row, "priority", TaskPriority::parse)?,
            start_date: get_date(row, "start_date")?,
            end_date: get_date(row, "end_date")?,
            assigned_to: row.get("assigned_to")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.name),
            text(&self.description),
            text(self.status.as_str()),
            text(self.priority.as_str()),
            date_value(&self.start_date),
            date_value(&self.end_date),
            text(&self.assigned_to),
        ]
    }

    fn display_row(&self, style: &RowStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            tr(style.lang, self.status.as_str()),
            tr(style.lang, self.priority.as_str()),
            self.start_date.format(DATE_FORMAT).to_string(),
            self.end_date.format(DATE_FORMAT).to_string(),
            self.assigned_to.clone(),
        ]
    }

    fn timestamps(&self) -> Option<(&str, &str)> {
        Some((&self.created_at, &self.updated_at))
    }
}
