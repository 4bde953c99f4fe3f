//! Shared numeric constants for the plot crate.

// ── Plot geometry ───────────────────────────────────────────────

/// Pixels per logical unit at the default viewport scale.
pub const SCALE_PX_PER_UNIT: f64 = 80.0;

/// Radius selected when a session starts.
pub const DEFAULT_RADIUS: f64 = 2.0;

/// Radius of a rendered point marker, in pixels.
pub const MARKER_RADIUS_PX: f64 = 4.0;

/// Half-length of an axis tick mark, in pixels.
pub const TICK_HALF_PX: f64 = 5.0;

/// Axis arrowhead length along the axis, in pixels.
pub const ARROW_LENGTH_PX: f64 = 10.0;

/// Axis arrowhead half-width across the axis, in pixels.
pub const ARROW_HALF_WIDTH_PX: f64 = 5.0;

// ── Colors ──────────────────────────────────────────────────────

/// Semi-transparent fill for the three region shapes.
pub const REGION_FILL: &str = "rgba(52, 152, 219, 0.4)";

/// Outline stroke for the region shapes.
pub const REGION_STROKE: &str = "#2980b9";

/// Axis, tick, and label color.
pub const AXIS_COLOR: &str = "#1f1a17";

/// Marker color for a point inside the region.
pub const HIT_COLOR: &str = "#27ae60";

/// Marker color for a point outside the region.
pub const MISS_COLOR: &str = "#e74c3c";

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key holding the serialized history.
pub const STORAGE_KEY: &str = "shotboard.history";
