//! Driver-neutral SQL values exchanged across the cursor boundary.

use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// One result row, columns in statement order.
pub type SqlRow = Vec<SqlValue>;

impl SqlValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Real(_) => "real",
            SqlValue::Text(_) => "text",
            SqlValue::Blob(_) => "blob",
        }
    }

    pub fn as_i64(&self) -> AppResult<i64> {
        match self {
            SqlValue::Integer(v) => Ok(*v),
            other => Err(AppError::RowDecode(format!(
                "expected integer, found {}",
                other.type_name()
            ))),
        }
    }

    pub fn as_optional_i64(&self) -> AppResult<Option<i64>> {
        match self {
            SqlValue::Null => Ok(None),
            other => other.as_i64().map(Some),
        }
    }

    /// SQLite hands back whole-valued REAL columns as integers when the
    /// value was bound as one, so integers are accepted here too.
    pub fn as_f64(&self) -> AppResult<f64> {
        match self {
            SqlValue::Real(v) => Ok(*v),
            SqlValue::Integer(v) => Ok(*v as f64),
            other => Err(AppError::RowDecode(format!(
                "expected real, found {}",
                other.type_name()
            ))),
        }
    }

    pub fn as_text(&self) -> AppResult<&str> {
        match self {
            SqlValue::Text(v) => Ok(v),
            other => Err(AppError::RowDecode(format!(
                "expected text, found {}",
                other.type_name()
            ))),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => Ok(()),
            SqlValue::Integer(v) => write!(f, "{v}"),
            SqlValue::Real(v) => write!(f, "{v}"),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlValue::Null)
    }
}
