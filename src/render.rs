//! Rendering: draws the full scene to a 2D context.
//!
//! This module is the only place that draws to a [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine and produces pixels. It does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::consts::{SELECTED_CONTOUR_COLOR, SELECTED_DASH_PX, SELECTED_LINE_WIDTH};
use crate::engine::EngineCore;
use crate::grid::{GridLines, grid_lines};
use crate::input::Selection;
use crate::mapper::{CoordinateMapper, Point};
use crate::rectangle::Rectangle;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

const BACKGROUND: &str = "#fff";
const MAJOR_GRID_COLOR: &str = "#999";
const MINOR_GRID_COLOR: &str = "#bbb";
const MINOR_GRID_DASH_PX: [f64; 2] = [4.0, 4.0];
const PRIMARY_FILL: &str = "#444";
const REGION_FILL: &str = "rgba(68, 68, 68, 0.25)";
const CONTOUR_COLOR: &str = "#000";
const DIRECTION_DASH_PX: [f64; 2] = [5.0, 5.0];

/// Draw the full scene: background, grid, regions, then cameras.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let mapper = &core.mapper;
    let (width, height) = mapper.canvas_size();

    // Layer 1: clear.
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    // Layer 2: grid.
    draw_grid(ctx, &grid_lines(mapper, core.config.minor_grid_zoom_threshold), width, height)?;

    // Layer 3: regions. The primary region goes last so its fill is on top,
    // then a selected region's outline is stroked again above that fill.
    let selection = core.selection();
    let rectangles = core.rectangles();
    for i in paint_order(rectangles.len()) {
        let fill = if i == 0 { PRIMARY_FILL } else { REGION_FILL };
        draw_rectangle(ctx, mapper, &rectangles[i], selection == Some(Selection::Rectangle(i)), fill)?;
    }
    if let Some(rect) = raised_outline(selection, rectangles.len()).map(|i| &rectangles[i]) {
        stroke_selected_outline(ctx, mapper, rect)?;
    }

    // Layer 4: cameras.
    for (i, cam) in core.cameras().iter().enumerate() {
        draw_camera(ctx, mapper, cam, selection == Some(Selection::Camera(i)), core.config.camera_body_radius)?;
    }

    Ok(())
}

// =============================================================
// Grid
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, lines: &GridLines, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(MAJOR_GRID_COLOR);
    ctx.set_line_width(2.0);
    stroke_lines(ctx, &lines.major_x, &lines.major_y, width, height);

    if !lines.minor_x.is_empty() || !lines.minor_y.is_empty() {
        ctx.set_stroke_style_str(MINOR_GRID_COLOR);
        ctx.set_line_width(1.0);
        ctx.set_line_dash(&dash(&MINOR_GRID_DASH_PX))?;
        stroke_lines(ctx, &lines.minor_x, &lines.minor_y, width, height);
        ctx.set_line_dash(&js_sys::Array::new())?;
    }
    Ok(())
}

fn stroke_lines(ctx: &CanvasRenderingContext2d, xs: &[f64], ys: &[f64], width: f64, height: f64) {
    ctx.begin_path();
    for &x in xs {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
    }
    for &y in ys {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
    }
    ctx.stroke();
}

// =============================================================
// Objects
// =============================================================

fn draw_rectangle(
    ctx: &CanvasRenderingContext2d,
    mapper: &CoordinateMapper,
    rect: &Rectangle,
    selected: bool,
    fill: &str,
) -> Result<(), JsValue> {
    let top_left = mapper.world_to_canvas(Point::new(rect.left(), rect.top()));
    let w = mapper.world_len_to_canvas(rect.w);
    let h = mapper.world_len_to_canvas(rect.h);

    ctx.save();
    ctx.set_fill_style_str(fill);
    ctx.fill_rect(top_left.x, top_left.y, w, h);
    apply_contour_style(ctx, selected)?;
    ctx.stroke_rect(top_left.x, top_left.y, w, h);
    ctx.restore();
    Ok(())
}

fn stroke_selected_outline(
    ctx: &CanvasRenderingContext2d,
    mapper: &CoordinateMapper,
    rect: &Rectangle,
) -> Result<(), JsValue> {
    let top_left = mapper.world_to_canvas(Point::new(rect.left(), rect.top()));
    ctx.save();
    apply_contour_style(ctx, true)?;
    ctx.stroke_rect(top_left.x, top_left.y, mapper.world_len_to_canvas(rect.w), mapper.world_len_to_canvas(rect.h));
    ctx.restore();
    Ok(())
}

fn draw_camera(
    ctx: &CanvasRenderingContext2d,
    mapper: &CoordinateMapper,
    cam: &Camera,
    selected: bool,
    body_radius: f64,
) -> Result<(), JsValue> {
    let spec = cam.spec();
    let center = mapper.world_to_canvas(cam.center());
    let handle = mapper.world_to_canvas(cam.rotate_handle());
    let body_px = mapper.world_len_to_canvas(body_radius);

    ctx.save();
    ctx.set_fill_style_str(spec.color);
    apply_contour_style(ctx, selected)?;

    // Body.
    ctx.begin_path();
    ctx.arc(center.x, center.y, body_px, 0.0, TAU)?;
    ctx.stroke();
    ctx.fill();

    // Direction to the rotate handle.
    ctx.set_line_dash(&dash(&DIRECTION_DASH_PX))?;
    ctx.begin_path();
    ctx.move_to(center.x, center.y);
    ctx.line_to(handle.x, handle.y);
    ctx.stroke();
    apply_contour_style(ctx, selected)?;

    // Rotate handle.
    ctx.begin_path();
    ctx.arc(handle.x, handle.y, body_px / 2.0, 0.0, TAU)?;
    ctx.stroke();
    ctx.fill();

    // Detection wedge between min and max range.
    let (start, end) = cam.fov_bounds();
    ctx.begin_path();
    ctx.arc(center.x, center.y, mapper.world_len_to_canvas(spec.min_range), start, end)?;
    ctx.arc_with_anticlockwise(center.x, center.y, mapper.world_len_to_canvas(spec.max_range), end, start, true)?;
    ctx.close_path();
    ctx.stroke();
    ctx.fill();

    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Rectangle indices in paint order: every other region first, the primary last.
fn paint_order(len: usize) -> impl Iterator<Item = usize> {
    (1..len).chain((len > 0).then_some(0))
}

/// The selected region whose outline would sit under the primary fill.
fn raised_outline(selection: Option<Selection>, len: usize) -> Option<usize> {
    match selection {
        Some(Selection::Rectangle(i)) if i > 0 && i < len => Some(i),
        _ => None,
    }
}

fn apply_contour_style(ctx: &CanvasRenderingContext2d, selected: bool) -> Result<(), JsValue> {
    if selected {
        ctx.set_stroke_style_str(SELECTED_CONTOUR_COLOR);
        ctx.set_line_width(SELECTED_LINE_WIDTH);
        ctx.set_line_dash(&dash(&SELECTED_DASH_PX))
    } else {
        ctx.set_stroke_style_str(CONTOUR_COLOR);
        ctx.set_line_width(1.0);
        ctx.set_line_dash(&js_sys::Array::new())
    }
}

fn dash(pattern: &[f64]) -> js_sys::Array {
    pattern.iter().map(|&v| JsValue::from_f64(v)).collect()
}
