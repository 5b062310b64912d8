//! Search and sort over display rows.
//!
//! Both operate on the text the user sees, not on SQL: search is a
//! case-insensitive substring scan over every cell, sort compares numbers
//! numerically once currency formatting is stripped.

use crate::db::pool::DbPool;
use crate::db::queries::load_all;
use crate::errors::{AppError, AppResult};
use crate::i18n::{Language, tr};
use crate::models::{Client, Employee, Entity, Invoice, Material, Project, Record, RowStyle, Task};
use crate::utils::parse_money;
use crate::utils::table::Table;
use std::cmp::Ordering;

/// Display headers + rows of one entity.
#[derive(Debug, Clone)]
pub struct Listing {
    /// English headers, used for lookups.
    pub keys: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Symbol in front of money cells.
    pub currency: String,
}

impl Listing {
    pub fn from_records<R: Record>(records: &[R], style: &RowStyle) -> Self {
        Self {
            keys: R::HEADERS.to_vec(),
            rows: records.iter().map(|r| r.display_row(style)).collect(),
            currency: style.currency.clone(),
        }
    }

    /// Every row of `entity`, ordered by id.
    pub fn load(pool: &DbPool, entity: Entity, style: &RowStyle) -> AppResult<Self> {
        Ok(match entity {
            Entity::Invoice => Self::from_records(&load_all::<Invoice>(pool)?, style),
            Entity::Employee => Self::from_records(&load_all::<Employee>(pool)?, style),
            Entity::Material => Self::from_records(&load_all::<Material>(pool)?, style),
            Entity::Project => Self::from_records(&load_all::<Project>(pool)?, style),
            Entity::Client => Self::from_records(&load_all::<Client>(pool)?, style),
            Entity::Task => Self::from_records(&load_all::<Task>(pool)?, style),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Terminal table with translated headers.
    pub fn to_table(&self, lang: Language) -> Table {
        let mut table = Table::new(self.headers(lang));
        for row in &self.rows {
            table.add_row(row.clone());
        }
        table
    }

    /// Uncoloured ` | `-separated text, one line per row.
    pub fn to_plain_text(&self, lang: Language) -> String {
        let mut out = self.headers(lang).join(" | ");
        out.push('\n');
        for row in &self.rows {
            out.push_str(&row.join(" | "));
            out.push('\n');
        }
        out
    }

    pub fn headers(&self, lang: Language) -> Vec<String> {
        self.keys.iter().map(|h| tr(lang, h)).collect()
    }

    /// Keep only rows where some cell contains `needle`.
    /// A blank needle keeps everything.
    pub fn search(&mut self, needle: &str) {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return;
        }
        self.rows
            .retain(|row| row.iter().any(|cell| cell.to_lowercase().contains(&needle)));
    }

    /// Resolve a column given by English header, translated header, or
    /// snake_case name (`hire_date`, `Hire Date`, `date d'embauche`).
    pub fn column_index(&self, name: &str) -> AppResult<usize> {
        let wanted = normalize(name);
        self.keys
            .iter()
            .position(|k| {
                normalize(k) == wanted || normalize(&tr(Language::Fr, k)) == wanted
            })
            .ok_or_else(|| AppError::UnknownColumn(name.to_string()))
    }

    /// Stable sort on one column.
    pub fn sort_by(&mut self, column: &str, descending: bool) -> AppResult<()> {
        let idx = self.column_index(column)?;

        let numeric = !self.rows.is_empty()
            && self.rows.iter().all(|r| {
                r.get(idx)
                    .map(|c| c.trim().is_empty() || parse_money(c, &self.currency).is_some())
                    .unwrap_or(true)
            });

        let currency = self.currency.as_str();
        self.rows.sort_by(|a, b| {
            let ca = a.get(idx).map(String::as_str).unwrap_or("");
            let cb = b.get(idx).map(String::as_str).unwrap_or("");
            let ord = if numeric {
                compare_numeric(ca, cb, currency)
            } else {
                ca.to_lowercase().cmp(&cb.to_lowercase())
            };
            if descending { ord.reverse() } else { ord }
        });
        Ok(())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', '-'], " ")
}

/// Empty cells sort before any number.
fn compare_numeric(a: &str, b: &str, currency: &str) -> Ordering {
    match (parse_money(a, currency), parse_money(b, currency)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
