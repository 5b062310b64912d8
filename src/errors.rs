//! Unified application error type.
//! Every layer (db, core, export, integrations, cli) returns AppError so that
//! `main` has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Validation / form errors
    // ---------------------------
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Missing required field: --{0}")]
    MissingField(String),

    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid status '{value}'. Allowed: {allowed}")]
    InvalidStatus { value: String, allowed: String },

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("A {entity} with id '{id}' already exists")]
    DuplicateId { entity: String, id: String },

    #[error("Email '{0}' is already used by another employee")]
    DuplicateEmail(String),

    #[error("No {entity} found with id '{id}'")]
    NotFound { entity: String, id: String },

    #[error("Unknown column '{0}'")]
    UnknownColumn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Integrations
    // ---------------------------
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Device error: {0}")]
    Device(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: &str) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
