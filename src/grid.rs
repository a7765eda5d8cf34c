//! Background grid: major lines every world unit, minor dashed lines on the
//! half units once zoomed in past a threshold.
//!
//! Lines are computed in canvas pixels for the current view so the renderer
//! only strokes them.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::mapper::{CoordinateMapper, Point};

/// Canvas-pixel positions of vertical (`x`) and horizontal (`y`) lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    pub major_x: Vec<f64>,
    pub major_y: Vec<f64>,
    pub minor_x: Vec<f64>,
    pub minor_y: Vec<f64>,
}

#[must_use]
pub fn grid_lines(mapper: &CoordinateMapper, minor_zoom_threshold: f64) -> GridLines {
    let (width, height) = mapper.canvas_size();
    let top_left = mapper.canvas_to_world(Point::new(0.0, 0.0));
    let bottom_right = mapper.canvas_to_world(Point::new(width, height));
    if !(top_left.x.is_finite() && top_left.y.is_finite() && bottom_right.x.is_finite() && bottom_right.y.is_finite())
    {
        return GridLines::default();
    }

    let to_px_x = |wx: f64| mapper.world_to_canvas(Point::new(wx, 0.0)).x;
    let to_px_y = |wy: f64| mapper.world_to_canvas(Point::new(0.0, wy)).y;

    let mut lines = GridLines {
        major_x: steps(top_left.x, bottom_right.x, 1).map(to_px_x).collect(),
        major_y: steps(top_left.y, bottom_right.y, 1).map(to_px_y).collect(),
        ..GridLines::default()
    };

    if mapper.zoom() > minor_zoom_threshold {
        lines.minor_x = steps(top_left.x, bottom_right.x, 2).map(to_px_x).collect();
        lines.minor_y = steps(top_left.y, bottom_right.y, 2).map(to_px_y).collect();
    }
    lines
}

/// World coordinates in `[lo, hi]` on a `1/subdiv` lattice. With `subdiv > 1`
/// the whole-unit positions are skipped; they belong to the major grid.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn steps(lo: f64, hi: f64, subdiv: i64) -> impl Iterator<Item = f64> {
    let scale = subdiv as f64;
    let first = (lo * scale).ceil() as i64;
    let last = (hi * scale).floor() as i64;
    (first..=last)
        .filter(move |k| subdiv == 1 || k % subdiv != 0)
        .map(move |k| k as f64 / scale)
}
