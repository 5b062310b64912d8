use super::{Entity, Record, RowStyle, optional_text, text};
use crate::utils::formatting::format_currency;
use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    pub supplier: String,
    pub unit_cost: f64,
    pub unit_type: String,
    pub stock_quantity: i64,
    /// Filesystem path to a picture of the material; never the image bytes.
    pub image_path: Option<String>,
}

impl Record for Material {
    const ENTITY: Entity = Entity::Material;
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "category",
        "supplier",
        "unit_cost",
        "unit_type",
        "stock_quantity",
        "image_path",
    ];
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Name",
        "Category",
        "Supplier",
        "Unit Cost",
        "Unit Type",
        "Stock",
        "Image",
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Material {
            id: row.get("id")?,
            name: row.get("name")?,
            category: row.get("category")?,
            supplier: row.get("supplier")?,
            unit_cost: row.get("unit_cost")?,
            unit_type: row.get("unit_type")?,
            stock_quantity: row.get("stock_quantity")?,
            image_path: row.get("image_path")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text(&self.id),
            text(&self.name),
            text(&self.category),
            text(&self.supplier),
            Value::Real(self.unit_cost),
            text(&self.unit_type),
            Value::Integer(self.stock_quantity),
            optional_text(&self.image_path),
        ]
    }

    fn display_row(&self, style: &RowStyle) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.supplier.clone(),
            format_currency(self.unit_cost, &style.currency),
            self.unit_type.clone(),
            self.stock_quantity.to_string(),
            self.image_path.clone().unwrap_or_default(),
        ]
    }
}
