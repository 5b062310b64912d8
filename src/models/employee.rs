use super::{DATE_FORMAT, Entity, Record, RowStyle, date_value, get_date, text};
use crate::utils::formatting::format_currency;
use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub email: String, // UNIQUE
    pub salary: f64,   // plain number; currency is applied on display only
    pub hire_date: NaiveDate,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Employee {
    const ENTITY: Entity = Entity::Employee;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "position",
        "department",
        "email",
        "salary",
        "hire_date",
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "First Name",
        "Last Name",
        "Position",
        "Department",
        "Email",
        "Salary",
        "Hire Date",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Employee {
            id: row.get("id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            position: row.get("position")?,
            department: row.get("department")?,
            email: row.get("email")?,
            salary: row.get("salary")?,
            hire_date: get_date(row, "hire_date")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.first_name),
            text(&self.last_name),
            text(&self.position),
            text(&self.department),
            text(&self.email),
            Value::Real(self.salary),
            date_value(&self.hire_date),
        ]
    }

    fn display_row(&self, style: &RowStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.position.clone(),
            self.department.clone(),
            self.email.clone(),
            format_currency(self.salary, &style.currency),
            self.hire_date.format(DATE_FORMAT).to_string(),
        ]
    }
}
