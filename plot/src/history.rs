//! Evaluated points and the append-only history.
//!
//! A [`Point`] is created whole from a verdict and never mutated afterward.
//! [`History`] supports exactly two mutations: append and a full clear. The
//! wire field names (`evaluatedAt`, `durationMs`) match the evaluator's
//! verdict record, so the same type deserializes server responses and
//! round-trips the persisted history.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

/// One evaluated sample: the submitted coordinates and the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// The classifier's verdict for (x, y, r).
    pub hit: bool,
    /// Server wall-clock timestamp. Opaque, display-only.
    #[serde(rename = "evaluatedAt")]
    pub evaluated_at: String,
    /// Server-side classification time in milliseconds. Display-only.
    #[serde(rename = "durationMs")]
    pub duration_ms: f64,
}

/// Append-only ordered log of evaluated points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History(Vec<Point>);

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point to the back of the log.
    pub fn append(&mut self, point: Point) {
        self.0.push(point);
    }

    /// Reset the log to empty. The only mutation besides [`append`](Self::append).
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// All points in insertion order. Consumers may reverse for display.
    #[must_use]
    pub fn all(&self) -> &[Point] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Points recorded under the given radius, in insertion order. Points
    /// stored under a different radius are suppressed from rendering, not
    /// deleted.
    pub fn visible(&self, r: f64) -> impl Iterator<Item = &Point> {
        // Radii come from a small discrete set; tolerance only guards against
        // text round-trip noise.
        self.0.iter().filter(move |p| (p.r - r).abs() < 1e-9)
    }

    /// Serialize the full sequence for the durable store.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Deserialize a previously persisted sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a valid point sequence. A *missing*
    /// slot is not an error — callers pass `None` through [`Self::new`].
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw).map(Self)
    }
}
