#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

/// A point in either canvas-pixel or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to `other`.
    #[must_use]
    pub fn dist_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }
}

/// Pan/zoom state and the world <-> canvas affine transform.
///
/// `ratio` is pixels per world unit: `zoom * canvas_width / reference_width`.
/// `center_x` / `center_y` are the pan offset in world units.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    zoom: f64,
    ratio: f64,
    pub center_x: f64,
    pub center_y: f64,
    canvas_width: f64,
    canvas_height: f64,
    reference_width: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64, reference_width: f64, min_zoom: f64, max_zoom: f64) -> Self {
        let mut mapper = Self {
            zoom: 1.0,
            ratio: 1.0,
            center_x: 0.0,
            center_y: 0.0,
            canvas_width,
            canvas_height,
            reference_width,
            min_zoom,
            max_zoom,
        };
        mapper.set_zoom(1.0);
        mapper
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Pixels per world unit at the current zoom.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.canvas_width, self.canvas_height)
    }

    /// Clamp `zoom` into the configured range and recompute the ratio.
    /// Non-finite input is ignored and the current zoom kept.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        // Not `f64::clamp`: that panics on inverted or NaN limits.
        self.zoom = zoom.max(self.min_zoom).min(self.max_zoom);
        self.recompute_ratio();
    }

    /// Re-read canvas dimensions; the ratio follows the width.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.recompute_ratio();
    }

    /// Shift the pan offset by a canvas-pixel delta.
    pub fn pan_by_pixels(&mut self, dx_px: f64, dy_px: f64) {
        self.center_x += dx_px / self.ratio;
        self.center_y += dy_px / self.ratio;
    }

    #[must_use]
    pub fn world_to_canvas(&self, world: Point) -> Point {
        Point {
            x: self.ratio.mul_add(self.center_x + world.x, self.canvas_width / 2.0),
            y: self.ratio.mul_add(self.center_y + world.y, self.canvas_height / 2.0),
        }
    }

    #[must_use]
    pub fn canvas_to_world(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x - self.canvas_width / 2.0) / self.ratio - self.center_x,
            y: (canvas.y - self.canvas_height / 2.0) / self.ratio - self.center_y,
        }
    }

    /// Convert a world-space length to canvas pixels.
    #[must_use]
    pub fn world_len_to_canvas(&self, len: f64) -> f64 {
        len * self.ratio
    }

    fn recompute_ratio(&mut self) {
        self.ratio = self.zoom * self.canvas_width / self.reference_width;
    }
}
