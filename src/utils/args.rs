//! Parsing of numeric command-line values.
//!
//! Values arrive as text so that a wrong kind of value is reported as
//! [`AppError::InvalidArgument`] before any database work starts.

use crate::errors::{AppError, AppResult};

pub fn parse_integer(name: &str, raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_argument(name, format!("must be an integer, got `{raw}`")))
}

pub fn parse_count(name: &str, raw: &str) -> AppResult<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        AppError::invalid_argument(name, format!("must be a non-negative integer, got `{raw}`"))
    })
}

/// Accepts integers and decimals; rejects NaN and infinities.
pub fn parse_number(name: &str, raw: &str) -> AppResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::invalid_argument(
            name,
            format!("must be a number, got `{raw}`"),
        )),
    }
}
