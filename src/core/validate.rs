//! Field validation applied before anything reaches the database.
//!
//! Patterns are anchored: `C001` is a valid client id, `xC001` and `C0011`
//! are not.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Client, Employee, Entity, Invoice, Material, Project, Record, Task};
use crate::utils::clean_amount_input;
use crate::utils::date;
use chrono::NaiveDate;
use regex::Regex;

pub const GENERIC_ID_PATTERN: &str = r"^[A-Za-z0-9-]+$";
pub const CLIENT_ID_PATTERN: &str = r"^C\d{3}$";
pub const TASK_ID_PATTERN: &str = r"^T\d{3}$";
pub const INVOICE_NUMBER_PATTERN: &str = r"^INV-\d{4}-\d{3}$";
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const PHONE_PATTERN: &str = r"^\+?\d{8,15}$";
const PERSON_NAME_PATTERN: &str = r"^\p{L}[\p{L} '\-]*$";

pub const MAX_INVOICE_AMOUNT: f64 = 1_000_000.0;
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

fn matches(pattern: &str, value: &str) -> AppResult<bool> {
    let re = Regex::new(pattern).map_err(|e| AppError::Other(format!("bad pattern: {e}")))?;
    Ok(re.is_match(value))
}

pub fn id_pattern(entity: Entity) -> &'static str {
    match entity {
        Entity::Client => CLIENT_ID_PATTERN,
        Entity::Task => TASK_ID_PATTERN,
        _ => GENERIC_ID_PATTERN,
    }
}

pub fn validate_id(entity: Entity, id: &str) -> AppResult<()> {
    if matches(id_pattern(entity), id)? {
        return Ok(());
    }
    let hint = match entity {
        Entity::Client => "expected C followed by 3 digits (e.g. C001)",
        Entity::Task => "expected T followed by 3 digits (e.g. T001)",
        _ => "only letters, digits and '-' are allowed",
    };
    Err(AppError::validation("id", format!("'{}': {}", id, hint)))
}

pub fn validate_invoice_number(number: &str) -> AppResult<()> {
    if matches(INVOICE_NUMBER_PATTERN, number)? {
        Ok(())
    } else {
        Err(AppError::validation(
            "number",
            format!("'{}': expected format INV-YYYY-NNN", number),
        ))
    }
}

pub fn validate_email(field: &str, email: &str) -> AppResult<()> {
    if matches(EMAIL_PATTERN, email.trim())? {
        Ok(())
    } else {
        Err(AppError::validation(field, format!("'{}' is not a valid email", email)))
    }
}

pub fn validate_phone(phone: &str) -> AppResult<()> {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if matches(PHONE_PATTERN, &compact)? {
        Ok(())
    } else {
        Err(AppError::validation(
            "phone",
            format!("'{}': expected 8 to 15 digits, optional leading +", phone),
        ))
    }
}

pub fn validate_person_name(field: &str, name: &str) -> AppResult<()> {
    if matches(PERSON_NAME_PATTERN, name.trim())? {
        Ok(())
    } else {
        Err(AppError::validation(field, format!("'{}' is not a valid name", name)))
    }
}

pub fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Strict `YYYY-MM-DD`.
pub fn parse_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    let trimmed = value.trim();
    // chrono accepts "2024-3-5"; the stored format must be zero padded
    if trimmed.len() != 10 {
        return Err(AppError::InvalidDate(format!("{field}={value}")));
    }
    date::parse_date(trimmed).ok_or_else(|| AppError::InvalidDate(format!("{field}={value}")))
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if end < start {
        Err(AppError::validation(
            "end_date",
            format!("end date {} is before start date {}", end, start),
        ))
    } else {
        Ok(())
    }
}

/// Parse a money input such as `"$25,000"`; negative values are refused.
pub fn parse_amount(field: &str, value: &str) -> AppResult<f64> {
    let cleaned = clean_amount_input(value);
    let amount: f64 = cleaned
        .parse()
        .map_err(|_| AppError::InvalidAmount(format!("{field}={value}")))?;
    if !amount.is_finite() {
        return Err(AppError::InvalidAmount(format!("{field}={value}")));
    }
    validate_non_negative(field, amount)?;
    Ok(amount)
}

pub fn parse_quantity(field: &str, value: &str) -> AppResult<i64> {
    let qty: i64 = clean_amount_input(value)
        .parse()
        .map_err(|_| AppError::InvalidAmount(format!("{field}={value}")))?;
    if qty < 0 {
        return Err(AppError::validation(field, "must not be negative"));
    }
    Ok(qty)
}

fn validate_non_negative(field: &str, amount: f64) -> AppResult<()> {
    if amount < 0.0 {
        Err(AppError::validation(field, "must not be negative"))
    } else {
        Ok(())
    }
}

pub fn validate_image_path(path: &str) -> AppResult<()> {
    let ext = std::path::Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(AppError::validation(
            "image",
            format!("'{}': expected one of {}", path, IMAGE_EXTENSIONS.join(", ")),
        ))
    }
}

/// Whole-record checks run on add and on edit.
pub trait Validate: Record {
    fn validate(&self) -> AppResult<()>;

    /// Uniqueness rules beyond the primary key.
    fn check_unique(&self, _pool: &DbPool) -> AppResult<()> {
        Ok(())
    }
}

impl Validate for Invoice {
    fn validate(&self) -> AppResult<()> {
        validate_id(Entity::Invoice, &self.id)?;
        validate_invoice_number(&self.number)?;
        validate_non_negative("amount", self.amount)?;
        if self.amount > MAX_INVOICE_AMOUNT {
            return Err(AppError::validation(
                "amount",
                format!("must not exceed {}", MAX_INVOICE_AMOUNT),
            ));
        }
        Ok(())
    }
}

impl Validate for Employee {
    fn validate(&self) -> AppResult<()> {
        validate_id(Entity::Employee, &self.id)?;
        validate_person_name("first_name", &self.first_name)?;
        validate_person_name("last_name", &self.last_name)?;
        require_text("position", &self.position)?;
        require_text("department", &self.department)?;
        validate_email("email", &self.email)?;
        if self.salary <= 0.0 {
            return Err(AppError::validation("salary", "must be greater than zero"));
        }
        if self.hire_date > date::today() {
            return Err(AppError::validation(
                "hire_date",
                format!("{} is in the future", self.hire_date),
            ));
        }
        Ok(())
    }

    fn check_unique(&self, pool: &DbPool) -> AppResult<()> {
        match queries::employee_with_email(pool, &self.email)? {
            Some(owner) if owner != self.id => Err(AppError::DuplicateEmail(self.email.clone())),
            _ => Ok(()),
        }
    }
}

impl Validate for Material {
    fn validate(&self) -> AppResult<()> {
        validate_id(Entity::Material, &self.id)?;
        require_text("name", &self.name)?;
        require_text("category", &self.category)?;
        require_text("supplier", &self.supplier)?;
        require_text("unit_type", &self.unit_type)?;
        validate_non_negative("unit_cost", self.unit_cost)?;
        if self.stock_quantity < 0 {
            return Err(AppError::validation("stock", "must not be negative"));
        }
        if let Some(path) = &self.image_path {
            validate_image_path(path)?;
        }
        Ok(())
    }
}

impl Validate for Project {
    fn validate(&self) -> AppResult<()> {
        validate_id(Entity::Project, &self.id)?;
        require_text("name", &self.name)?;
        validate_email("client_email", &self.client_email)?;
        validate_date_range(self.start_date, self.end_date)?;
        validate_non_negative("budget", self.budget)?;
        require_text("client_name", &self.client_name)?;
        require_text("location", &self.location)?;
        Ok(())
    }
}

impl Validate for Client {
    fn validate(&self) -> AppResult<()> {
        validate_id(Entity::Client, &self.id)?;
        validate_person_name("last_name", &self.last_name)?;
        validate_person_name("first_name", &self.first_name)?;
        validate_phone(&self.phone)?;
        validate_email("email", &self.email)?;
        require_text("project", &self.project)?;
        validate_non_negative("invoice_amount", self.invoice_amount)?;
        Ok(())
    }
}

impl Validate for Task {
    fn validate(&self) -> AppResult<()> {
        validate_id(Entity::Task, &self.id)?;
        require_text("name", &self.name)?;
        validate_date_range(self.start_date, self.end_date)?;
        require_text("assigned_to", &self.assigned_to)?;
        Ok(())
    }
}
