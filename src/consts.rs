//! Shared numeric constants for the layout editor.

// ── View ────────────────────────────────────────────────────────

/// World width visible across the full canvas at zoom 1.
pub const REFERENCE_WORLD_WIDTH: f64 = 4.4;

/// World height visible across the full canvas at zoom 1.
pub const REFERENCE_WORLD_HEIGHT: f64 = 3.3;

/// Canvas size assumed until the host reports the real element size.
pub const DEFAULT_CANVAS_WIDTH_PX: f64 = 880.0;
pub const DEFAULT_CANVAS_HEIGHT_PX: f64 = 660.0;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// Zoom change per wheel pixel. Scrolling down (positive delta) zooms out.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.01;

/// Minor (half-unit) grid lines are drawn only above this zoom.
pub const MINOR_GRID_ZOOM_THRESHOLD: f64 = 0.8;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space click slop in pixels, independent of zoom.
pub const CLICK_TOLERANCE_PX: f64 = 7.0;

/// Radius of a camera body in world units. The rotate handle uses half of it.
pub const CAMERA_BODY_RADIUS: f64 = 0.05;

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height a resize may produce, in world units.
pub const MIN_RECT_SIZE: f64 = 0.01;

/// Size of a rectangle created from the toolbar.
pub const DEFAULT_RECT_SIZE: f64 = 1.0;

/// The primary "screen" region present in every new scene.
pub const SCREEN_WIDTH: f64 = 1.21;
pub const SCREEN_HEIGHT: f64 = 0.68;

// ── Styling ─────────────────────────────────────────────────────

pub const SELECTED_CONTOUR_COLOR: &str = "#1e90ff";
pub const SELECTED_LINE_WIDTH: f64 = 3.0;
/// Dash pattern (on, off) for selection outlines, in pixels.
pub const SELECTED_DASH_PX: [f64; 2] = [10.0, 5.0];
