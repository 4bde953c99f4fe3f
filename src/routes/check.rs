//! Point check route.
//!
//! ERROR HANDLING
//! ==============
//! Every rejection — missing field, unparsable number, domain violation —
//! answers `400` with an `{"error": "..."}` body naming the cause, so the
//! client can surface it verbatim. The server re-validates everything; it
//! never trusts the client's pre-flight check.

#[cfg(test)]
#[path = "check_test.rs"]
mod check_test;

use std::time::Instant;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use plot::history::Point;
use plot::input::parse_coord;
use plot::region;

use crate::services::validate::{self, ValidationError};

/// Request body for a check. Each coordinate accepts a JSON number or a
/// numeric string (locale-configured clients send decimal commas).
#[derive(Debug, Deserialize)]
pub struct CheckBody {
    x: Option<Value>,
    y: Option<Value>,
    r: Option<Value>,
}

/// `POST /api/check` — classify a point against the region.
pub async fn check(Json(body): Json<CheckBody>) -> Response {
    let started = Instant::now();

    let (x, y, r) = match parse_body(&body) {
        Ok(triple) => triple,
        Err(e) => {
            tracing::warn!(error = %e, "check request rejected");
            return bad_request(&e.to_string());
        }
    };

    if let Err(e) = validate::validate_coords(x, y, r) {
        tracing::warn!(%x, %y, %r, error = %e, "check request out of domain");
        return bad_request(&e.to_string());
    }

    let hit = region::classify(x, y, r);
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
    let evaluated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    tracing::info!(%x, %y, %r, hit, duration_ms, "point classified");

    let verdict = Point { x, y, r, hit, evaluated_at, duration_ms };
    (StatusCode::OK, Json(verdict)).into_response()
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// Pull (x, y, r) out of the lenient body shape.
fn parse_body(body: &CheckBody) -> Result<(f64, f64, f64), ValidationError> {
    let x = coord_field(body.x.as_ref(), "x")?;
    let y = coord_field(body.y.as_ref(), "y")?;
    let r = coord_field(body.r.as_ref(), "r")?;
    Ok((x, y, r))
}

/// One coordinate field: a finite JSON number or a parseable numeric string.
fn coord_field(value: Option<&Value>, name: &'static str) -> Result<f64, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(name))?;
    match value {
        Value::Number(n) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or(ValidationError::NotANumber(name)),
        Value::String(s) => parse_coord(s).ok_or(ValidationError::NotANumber(name)),
        _ => Err(ValidationError::NotANumber(name)),
    }
}
