//! Logical-to-pixel coordinate transform for the plot surface.
//!
//! The logical origin maps to the geometric center of the surface. A fixed
//! scale factor converts logical units to pixels, with the Y axis inverted
//! because pixel rows grow downward.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::SCALE_PX_PER_UNIT;

/// A point in either logical or pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Transform between the centered logical coordinate system and surface pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
    /// Pixels per logical unit.
    pub scale: f64,
}

impl Viewport {
    /// A viewport over a `width` × `height` surface at the default scale.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, scale: SCALE_PX_PER_UNIT }
    }

    /// Pixel position of the logical origin.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert a logical point to surface pixels.
    #[must_use]
    pub fn to_pixel(&self, logical: Point) -> Point {
        let c = self.center();
        Point {
            x: c.x + logical.x * self.scale,
            y: c.y - logical.y * self.scale,
        }
    }

    /// Convert a surface pixel back to logical coordinates.
    #[must_use]
    pub fn to_logical(&self, pixel: Point) -> Point {
        let c = self.center();
        Point {
            x: (pixel.x - c.x) / self.scale,
            y: (c.y - pixel.y) / self.scale,
        }
    }
}
