//! Region membership predicates.
//!
//! The region is a union of three shapes anchored at the origin and scaled by
//! the radius `r`, one per quadrant: a quarter disk (x≥0, y≥0), a rectangle
//! (x≥0, y≤0), and a right triangle (x≤0, y≥0). The quadrant x≤0, y≤0 is
//! always outside. Each shape has its own predicate and the verdict is their
//! OR — the predicates are deliberately kept separate rather than folded into
//! one combined inequality, so each boundary stays auditable on its own.
//!
//! All boundary comparisons are inclusive: a point exactly on an edge is a
//! hit. Precondition: `r > 0` (callers validate; `r = 0` degenerates to the
//! origin only).

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

/// One of the three shapes making up the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Quarter disk of radius r in the quadrant x≥0, y≥0.
    QuarterDisk,
    /// Rectangle 0 ≤ x ≤ r, -r/2 ≤ y ≤ 0.
    Rectangle,
    /// Right triangle with legs r, bounded by the line from (-r, 0) to (0, r).
    Triangle,
}

/// Every shape in the union, in the order they are drawn.
pub const SHAPES: [Shape; 3] = [Shape::QuarterDisk, Shape::Rectangle, Shape::Triangle];

impl Shape {
    /// Whether `(x, y)` lies inside this shape (boundary inclusive) at scale `r`.
    #[must_use]
    pub fn contains(self, x: f64, y: f64, r: f64) -> bool {
        match self {
            Self::QuarterDisk => x >= 0.0 && y >= 0.0 && x * x + y * y <= r * r,
            Self::Rectangle => x >= 0.0 && x <= r && y >= -r / 2.0 && y <= 0.0,
            Self::Triangle => x <= 0.0 && y >= 0.0 && y <= x + r,
        }
    }
}

/// Whether `(x, y)` lies inside the region at scale `r`.
#[must_use]
pub fn classify(x: f64, y: f64, r: f64) -> bool {
    SHAPES.iter().any(|shape| shape.contains(x, y, r))
}
