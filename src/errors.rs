//! Unified application error type.
//! All modules (db, repository, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use rusqlite::ErrorCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Caller errors
    // ---------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Connection error: {0}")]
    Connection(#[source] rusqlite::Error),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(#[source] rusqlite::Error),

    #[error("Statement error: {0}")]
    Statement(#[source] rusqlite::Error),

    #[error("Unexpected row shape: {0}")]
    RowDecode(String),

    // ---------------------------
    // IO / export
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn invalid_argument(name: &str, detail: impl std::fmt::Display) -> Self {
        AppError::InvalidArgument(format!("{name} {detail}"))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, AppError::ConstraintViolation(_))
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, AppError::Statement(_))
    }
}

/// Statement-level SQLite failures. Opening the store maps to
/// [`AppError::Connection`] explicitly at the call site.
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => AppError::ConstraintViolation(err),
            _ => AppError::Statement(err),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
