//! Form input parsing and pre-flight validation.
//!
//! The engine rejects bad input before any request is issued; the server
//! repeats the same checks on its side. Decimal commas are accepted because
//! locale-configured browsers produce them in number fields.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::domain;

/// Why a submission was rejected before reaching the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("X must be a number between {} and {}", domain::X_MIN, domain::X_MAX)]
    InvalidX,
    #[error("Y must be one of the allowed values")]
    InvalidY,
    #[error("R must be one of the allowed radii")]
    InvalidR,
}

/// A validated (x, y, r) triple ready to send to the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Submission {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// Parse a coordinate field, tolerating a decimal comma and surrounding
/// whitespace. Returns `None` for anything that is not a finite number.
#[must_use]
pub fn parse_coord(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Validate raw form values against the input domain.
///
/// # Errors
///
/// Returns the first domain violation found, checking x, then y, then r.
pub fn validate(x_raw: &str, y_raw: &str, r: f64) -> Result<Submission, InputError> {
    let x = parse_coord(x_raw).filter(|&x| domain::valid_x(x)).ok_or(InputError::InvalidX)?;
    let y = parse_coord(y_raw).filter(|&y| domain::valid_y(y)).ok_or(InputError::InvalidY)?;
    if !domain::valid_r(r) {
        return Err(InputError::InvalidR);
    }
    Ok(Submission { x, y, r })
}
