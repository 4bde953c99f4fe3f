//! Plot rendering: draws the full scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the history and viewport and produces
//! pixels — it does not mutate any engine state. Every repaint is a full
//! clear-and-redraw, never incremental, in a fixed layer order: arrowheads,
//! axes, tick marks, region shapes, point markers.
//!
//! The layout decisions (which ticks exist, where a marker lands, what color
//! it gets) live in pure helpers so they are testable without a browser.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    ARROW_HALF_WIDTH_PX, ARROW_LENGTH_PX, AXIS_COLOR, HIT_COLOR, MARKER_RADIUS_PX, MISS_COLOR,
    REGION_FILL, REGION_STROKE, TICK_HALF_PX,
};
use crate::history::History;
use crate::viewport::{Point, Viewport};

/// Label font for the axis and tick annotations.
const LABEL_FONT: &str = "12px sans-serif";

// =============================================================
// Pure layout helpers
// =============================================================

/// Tick stops along one axis: the logical offset and its symbolic label.
#[must_use]
pub fn tick_stops(r: f64) -> [(f64, &'static str); 4] {
    [(r, "R"), (r / 2.0, "R/2"), (-r / 2.0, "-R/2"), (-r, "-R")]
}

/// Marker fill color for a verdict.
#[must_use]
pub fn marker_color(hit: bool) -> &'static str {
    if hit { HIT_COLOR } else { MISS_COLOR }
}

/// Pixel position and fill color of every marker the next repaint will draw.
///
/// Points recorded under a radius other than `r` are suppressed here — they
/// stay in the history, they just don't render.
#[must_use]
pub fn marker_specs(vp: &Viewport, r: f64, history: &History) -> Vec<(Point, &'static str)> {
    history
        .visible(r)
        .map(|p| (vp.to_pixel(Point::new(p.x, p.y)), marker_color(p.hit)))
        .collect()
}

// =============================================================
// Scene
// =============================================================

/// Draw the full scene: axes, ticks, region shapes, and point markers.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    r: f64,
    history: &History,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, vp.width, vp.height);

    draw_arrowheads(ctx, vp);
    draw_axes(ctx, vp)?;
    draw_ticks(ctx, vp, r)?;
    draw_region(ctx, vp, r)?;
    draw_markers(ctx, vp, r, history)?;

    Ok(())
}

fn draw_arrowheads(ctx: &CanvasRenderingContext2d, vp: &Viewport) {
    let c = vp.center();
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);

    // Y+ at the top edge.
    ctx.begin_path();
    ctx.move_to(c.x - ARROW_HALF_WIDTH_PX, ARROW_LENGTH_PX);
    ctx.line_to(c.x, 0.0);
    ctx.line_to(c.x + ARROW_HALF_WIDTH_PX, ARROW_LENGTH_PX);
    ctx.stroke();

    // X+ at the right edge.
    ctx.begin_path();
    ctx.move_to(vp.width - ARROW_LENGTH_PX, c.y - ARROW_HALF_WIDTH_PX);
    ctx.line_to(vp.width, c.y);
    ctx.line_to(vp.width - ARROW_LENGTH_PX, c.y + ARROW_HALF_WIDTH_PX);
    ctx.stroke();
}

fn draw_axes(ctx: &CanvasRenderingContext2d, vp: &Viewport) -> Result<(), JsValue> {
    let c = vp.center();
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_line_width(2.0);
    ctx.set_font(LABEL_FONT);

    ctx.begin_path();
    ctx.move_to(0.0, c.y);
    ctx.line_to(vp.width, c.y);
    ctx.stroke();
    ctx.fill_text("X", vp.width - 15.0, c.y - 10.0)?;

    ctx.begin_path();
    ctx.move_to(c.x, 0.0);
    ctx.line_to(c.x, vp.height);
    ctx.stroke();
    ctx.fill_text("Y", c.x + 10.0, 15.0)?;

    Ok(())
}

fn draw_ticks(ctx: &CanvasRenderingContext2d, vp: &Viewport, r: f64) -> Result<(), JsValue> {
    let c = vp.center();
    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_line_width(1.0);
    ctx.set_font(LABEL_FONT);

    for (offset, label) in tick_stops(r) {
        // X axis: vertical tick, label underneath.
        let tick = vp.to_pixel(Point::new(offset, 0.0));
        ctx.begin_path();
        ctx.move_to(tick.x, c.y - TICK_HALF_PX);
        ctx.line_to(tick.x, c.y + TICK_HALF_PX);
        ctx.stroke();
        ctx.fill_text(label, tick.x - 10.0, c.y + 20.0)?;

        // Y axis: horizontal tick, label to the right.
        let tick = vp.to_pixel(Point::new(0.0, offset));
        ctx.begin_path();
        ctx.move_to(c.x - TICK_HALF_PX, tick.y);
        ctx.line_to(c.x + TICK_HALF_PX, tick.y);
        ctx.stroke();
        ctx.fill_text(label, c.x + 10.0, tick.y + 5.0)?;
    }

    Ok(())
}

fn draw_region(ctx: &CanvasRenderingContext2d, vp: &Viewport, r: f64) -> Result<(), JsValue> {
    let c = vp.center();
    let r_px = r * vp.scale;
    ctx.set_fill_style_str(REGION_FILL);
    ctx.set_stroke_style_str(REGION_STROKE);
    ctx.set_line_width(1.0);

    // Quarter disk, x≥0 y≥0: sweep from the top of the arc to the right.
    ctx.begin_path();
    ctx.move_to(c.x, c.y);
    ctx.arc(c.x, c.y, r_px, -PI / 2.0, 0.0)?;
    ctx.close_path();
    ctx.fill();
    ctx.stroke();

    // Rectangle, x≥0 y≤0: width r, half-height r/2, below the X axis.
    ctx.begin_path();
    ctx.rect(c.x, c.y, r_px, r_px / 2.0);
    ctx.fill();
    ctx.stroke();

    // Triangle, x≤0 y≥0: legs r, hypotenuse from (-r, 0) to (0, r).
    let left = vp.to_pixel(Point::new(-r, 0.0));
    let top = vp.to_pixel(Point::new(0.0, r));
    ctx.begin_path();
    ctx.move_to(c.x, c.y);
    ctx.line_to(left.x, left.y);
    ctx.line_to(top.x, top.y);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();

    Ok(())
}

fn draw_markers(
    ctx: &CanvasRenderingContext2d,
    vp: &Viewport,
    r: f64,
    history: &History,
) -> Result<(), JsValue> {
    for (pixel, color) in marker_specs(vp, r, history) {
        ctx.begin_path();
        ctx.arc(pixel.x, pixel.y, MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
        ctx.set_fill_style_str(color);
        ctx.fill();
    }
    Ok(())
}
