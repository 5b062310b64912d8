//! Chart data computed from the rows currently listed for an entity.
//!
//! Aggregation works on display rows (the same cells the `list` command
//! prints), so a `--search` filter narrows the charts too.

use crate::errors::{AppError, AppResult};
use crate::models::Entity;
use crate::utils::parse_money;
use crate::utils::date::month_key;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Pie,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// One slice / bar per distinct cell value of the column.
    Column(&'static str),
    /// One bar per `YYYY-MM` of a date column.
    Month(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Count,
    /// Sum of a numeric (possibly currency formatted) column.
    Sum(&'static str),
    /// Like `Sum`, but the column is a money column.
    SumMoney(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ChartSpec {
    pub title: &'static str,
    pub kind: ChartKind,
    pub group: Grouping,
    pub measure: Measure,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub title: String,
    pub kind: ChartKind,
    pub money: bool,
    pub series: Vec<(String, f64)>,
}

impl ChartData {
    pub fn total(&self) -> f64 {
        self.series.iter().map(|(_, v)| v).sum()
    }
}

pub fn specs(entity: Entity) -> Vec<ChartSpec> {
    use ChartKind::*;
    use Grouping::*;
    use Measure::*;

    let spec = |title: &'static str, kind: ChartKind, group: Grouping, measure: Measure| ChartSpec {
        title,
        kind,
        group,
        measure,
    };

    match entity {
        Entity::Invoice => vec![
            spec("Payment Status Distribution", Pie, Column("Status"), Count),
            spec("Monthly Payments", Bar, Month("Date"), SumMoney("Amount")),
        ],
        Entity::Employee => vec![
            spec("Employees per Department", Pie, Column("Department"), Count),
            spec("Salary by Department", Bar, Column("Department"), SumMoney("Salary")),
        ],
        Entity::Material => vec![
            spec("Materials per Category", Pie, Column("Category"), Count),
            spec("Stock by Category", Bar, Column("Category"), Sum("Stock")),
        ],
        Entity::Project => vec![
            spec("Projects by Status", Pie, Column("Status"), Count),
            spec("Budget by Status", Bar, Column("Status"), SumMoney("Budget")),
        ],
        Entity::Client => vec![
            spec("Clients per Project", Pie, Column("Project"), Count),
            spec(
                "Invoice Amount by Project",
                Bar,
                Column("Project"),
                SumMoney("Invoice Amount"),
            ),
        ],
        Entity::Task => vec![
            spec("Tasks by Status", Pie, Column("Status"), Count),
            spec("Tasks by Priority", Bar, Column("Priority"), Count),
        ],
    }
}

fn column_index(headers: &[&str], name: &str) -> AppResult<usize> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::UnknownColumn(name.to_string()))
}

/// Aggregate `rows` (laid out as `headers`) according to `spec`.
/// Money cells carry `currency` in front of the amount.
/// Series are ordered by group key; rows with an unusable key or value are skipped.
pub fn aggregate(
    spec: &ChartSpec,
    headers: &[&str],
    rows: &[Vec<String>],
    currency: &str,
) -> AppResult<ChartData> {
    let (group_idx, by_month) = match spec.group {
        Grouping::Column(name) => (column_index(headers, name)?, false),
        Grouping::Month(name) => (column_index(headers, name)?, true),
    };

    let (value_idx, money) = match spec.measure {
        Measure::Count => (None, false),
        Measure::Sum(name) => (Some(column_index(headers, name)?), false),
        Measure::SumMoney(name) => (Some(column_index(headers, name)?), true),
    };

    let mut buckets: BTreeMap<String, f64> = BTreeMap::new();

    for row in rows {
        let Some(raw_key) = row.get(group_idx) else {
            continue;
        };

        let key = if by_month {
            match month_key(raw_key) {
                Some(k) => k,
                None => continue,
            }
        } else if raw_key.trim().is_empty() {
            "(none)".to_string()
        } else {
            raw_key.trim().to_string()
        };

        let value = match value_idx {
            None => 1.0,
            Some(i) => match row.get(i).and_then(|c| parse_money(c, currency)) {
                Some(v) => v,
                None => continue,
            },
        };

        *buckets.entry(key).or_insert(0.0) += value;
    }

    Ok(ChartData {
        title: spec.title.to_string(),
        kind: spec.kind,
        money,
        series: buckets.into_iter().collect(),
    })
}
