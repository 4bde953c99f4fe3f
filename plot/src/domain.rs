//! Allowed input domain for submitted coordinates.
//!
//! The engine checks these before issuing a request, and the server checks
//! them again before classifying — the server never trusts the client's
//! pre-flight validation. Both sides share this one definition.

#[cfg(test)]
#[path = "domain_test.rs"]
mod domain_test;

/// Lower bound of the allowed X range (inclusive).
pub const X_MIN: f64 = -5.0;

/// Upper bound of the allowed X range (inclusive).
pub const X_MAX: f64 = 3.0;

/// The discrete set of allowed Y values.
pub const ALLOWED_Y: [f64; 9] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

/// The discrete set of allowed radii.
pub const ALLOWED_R: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];

/// Tolerance for set membership, so values that round-tripped through text
/// are never rejected.
const SET_EPSILON: f64 = 1e-9;

fn in_set(value: f64, set: &[f64]) -> bool {
    value.is_finite() && set.iter().any(|allowed| (value - allowed).abs() < SET_EPSILON)
}

/// Whether `x` is a finite number within the allowed range.
#[must_use]
pub fn valid_x(x: f64) -> bool {
    x.is_finite() && (X_MIN..=X_MAX).contains(&x)
}

/// Whether `y` is one of the allowed discrete values.
#[must_use]
pub fn valid_y(y: f64) -> bool {
    in_set(y, &ALLOWED_Y)
}

/// Whether `r` is one of the allowed radii.
#[must_use]
pub fn valid_r(r: f64) -> bool {
    in_set(r, &ALLOWED_R)
}
