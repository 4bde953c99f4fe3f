//! Server-side domain validation.
//!
//! The browser engine pre-validates before it ever submits, but the server
//! treats every request as untrusted and re-checks against the same domain
//! constants the `plot` crate exposes.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use plot::domain;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("{0} is not a number")]
    NotANumber(&'static str),
    #[error("x must be between -5 and 3")]
    XOutOfRange,
    #[error("y must be one of -3, -2, -1, 0, 1, 2, 3, 4, 5")]
    YNotAllowed,
    #[error("r must be one of 1, 1.5, 2, 2.5, 3")]
    RNotAllowed,
}

/// Check a parsed (x, y, r) triple against the allowed domain.
pub fn validate_coords(x: f64, y: f64, r: f64) -> Result<(), ValidationError> {
    if !domain::valid_x(x) {
        return Err(ValidationError::XOutOfRange);
    }
    if !domain::valid_y(y) {
        return Err(ValidationError::YNotAllowed);
    }
    if !domain::valid_r(r) {
        return Err(ValidationError::RNotAllowed);
    }
    Ok(())
}
