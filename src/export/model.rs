// src/export/model.rs

use crate::core::listing::Listing;
use crate::i18n::{Language, tr};
use crate::models::Entity;
use serde_json::{Map, Value};

/// Flat table handed to every writer: title, translated headers, display rows.
#[derive(Debug, Clone)]
pub struct Report {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub currency: String,
}

impl Report {
    pub fn from_listing(entity: Entity, listing: &Listing, lang: Language) -> Self {
        Self {
            title: tr(lang, entity.report_title()),
            headers: listing.headers(lang),
            rows: listing.rows.clone(),
            currency: listing.currency.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// One JSON object per row, keyed by header, in column order.
    pub(crate) fn to_json_objects(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (h, cell) in self.headers.iter().zip(row) {
                    obj.insert(h.clone(), Value::String(cell.clone()));
                }
                Value::Object(obj)
            })
            .collect()
    }
}
