use tracing::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, CameraState, CameraType};
use crate::config::SceneConfig;
use crate::consts::{DEFAULT_CANVAS_HEIGHT_PX, DEFAULT_CANVAS_WIDTH_PX, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{ConfigError, SceneError};
use crate::hit::HitTester;
use crate::input::{Button, Cursor, InputState, Selection, WheelDelta};
use crate::mapper::{CoordinateMapper, Point};
use crate::panel::{Field, NullPanel, Panel, PanelKind};
use crate::rectangle::{RectState, Rectangle};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(Cursor),
    SelectionChanged(Option<Selection>),
    ObjectUpdated(Selection),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Rectangle 0 is the primary screen region: it always exists and cannot be deleted.
pub struct EngineCore {
    pub config: SceneConfig,
    pub mapper: CoordinateMapper,
    pub input: InputState,
    rectangles: Vec<Rectangle>,
    cameras: Vec<Camera>,
    selection: Option<Selection>,
    panel: Box<dyn Panel>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::build(SceneConfig::default(), Box::new(NullPanel))
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a scene with the screen region at the origin and one camera facing it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `config` fails [`SceneConfig::validate`].
    pub fn with_config(config: SceneConfig, panel: Box<dyn Panel>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, panel))
    }

    fn build(config: SceneConfig, panel: Box<dyn Panel>) -> Self {
        let mapper = CoordinateMapper::new(
            DEFAULT_CANVAS_WIDTH_PX,
            DEFAULT_CANVAS_HEIGHT_PX,
            config.reference_world_width,
            config.min_zoom,
            config.max_zoom,
        );
        Self {
            config,
            mapper,
            input: InputState::default(),
            rectangles: vec![Rectangle::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)],
            cameras: vec![Camera::new(-1.0, 0.0, CameraType::D435)],
            selection: None,
            panel,
        }
    }

    // --- Viewport ---

    /// Re-read the canvas pixel size. Non-positive sizes (a hidden canvas) are ignored.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            self.mapper.set_canvas_size(width, height);
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => self.primary_down(screen_pt),
            Button::Secondary => {
                self.input.pan_last_screen = Some(screen_pt);
                Vec::new()
            }
            Button::Middle => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if let Some(last_world) = self.input.manip_last_world {
            let world = self.mapper.canvas_to_world(screen_pt);
            self.input.manip_last_world = Some(world);
            // A held pan resumes from here once the primary button is released.
            if self.input.pan_last_screen.is_some() {
                self.input.pan_last_screen = Some(screen_pt);
            }
            return self.manipulate(world, world.x - last_world.x, world.y - last_world.y);
        }
        if let Some(last_screen) = self.input.pan_last_screen {
            self.mapper.pan_by_pixels(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
            self.input.pan_last_screen = Some(screen_pt);
            return Vec::new();
        }
        vec![Action::SetCursor(self.hover_cursor(screen_pt))]
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => {
                let was_manipulating = self.input.manip_last_world.take().is_some();
                self.reset_manipulation_state();
                if was_manipulating {
                    debug!(selection = ?self.selection, "manipulation ended");
                }
                vec![Action::SetCursor(self.hover_cursor(screen_pt))]
            }
            Button::Secondary => {
                self.input.pan_last_screen = None;
                Vec::new()
            }
            Button::Middle => Vec::new(),
        }
    }

    /// Scrolling down (positive `dy`) zooms out.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        let zoom = (-delta.dy).mul_add(self.config.wheel_sensitivity, self.mapper.zoom());
        self.mapper.set_zoom(zoom);
        Vec::new()
    }

    fn primary_down(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.mapper.canvas_to_world(screen_pt);
        let hits = HitTester::new(&self.mapper, self.config.click_tolerance_px);
        let body_radius = self.config.camera_body_radius;

        let accepted = match self.selection {
            Some(Selection::Camera(i)) => self
                .cameras
                .get_mut(i)
                .is_some_and(|cam| cam.on_pointer_down(world, &hits, body_radius)),
            Some(Selection::Rectangle(i)) => self
                .rectangles
                .get_mut(i)
                .is_some_and(|rect| rect.on_pointer_down(world, &hits)),
            None => false,
        };
        if accepted {
            self.input.manip_last_world = Some(world);
            debug!(selection = ?self.selection, x = world.x, y = world.y, "manipulation started");
            return vec![Action::SetCursor(Cursor::Grabbing)];
        }

        let picked = pick(&self.cameras, &self.rectangles, world, &hits, body_radius);
        let mut actions = Vec::new();
        if self.selection.is_some() {
            self.select(None);
            actions.push(Action::SelectionChanged(None));
        }
        if picked.is_some() {
            self.select(picked);
            actions.push(Action::SelectionChanged(picked));
        }
        actions
    }

    fn manipulate(&mut self, world: Point, dx: f64, dy: f64) -> Vec<Action> {
        let Some(selection) = self.selection else {
            return Vec::new();
        };
        match selection {
            Selection::Camera(i) => {
                if let Some(cam) = self.cameras.get_mut(i) {
                    cam.apply_manip_delta(world, dx, dy);
                }
            }
            Selection::Rectangle(i) => {
                if let Some(rect) = self.rectangles.get_mut(i) {
                    rect.apply_manip_delta(dx, dy, self.config.min_rect_size);
                }
            }
        }
        self.sync_panel();
        vec![Action::ObjectUpdated(selection)]
    }

    fn hover_cursor(&self, screen_pt: Point) -> Cursor {
        let world = self.mapper.canvas_to_world(screen_pt);
        let hits = HitTester::new(&self.mapper, self.config.click_tolerance_px);
        let cursor = match self.selection {
            Some(Selection::Camera(i)) => self
                .cameras
                .get(i)
                .and_then(|cam| cam.hover_cursor(world, &hits, self.config.camera_body_radius)),
            Some(Selection::Rectangle(i)) => self.rectangles.get(i).and_then(|rect| rect.hover_cursor(world, &hits)),
            None => None,
        };
        cursor.unwrap_or_default()
    }

    fn reset_manipulation_state(&mut self) {
        match self.selection {
            Some(Selection::Camera(i)) => {
                if let Some(cam) = self.cameras.get_mut(i) {
                    cam.state = CameraState::Default;
                }
            }
            Some(Selection::Rectangle(i)) => {
                if let Some(rect) = self.rectangles.get_mut(i) {
                    rect.state = RectState::Default;
                }
            }
            None => {}
        }
    }

    // --- Selection ---

    fn select(&mut self, selection: Option<Selection>) {
        if self.selection == selection {
            return;
        }
        if let Some(old) = self.selection {
            self.reset_manipulation_state();
            self.panel.hide(panel_kind(old));
        }
        self.input.manip_last_world = None;
        self.selection = selection;
        if let Some(new) = selection {
            self.sync_panel();
            self.panel.show(panel_kind(new));
        }
        debug!(?selection, "selection changed");
    }

    /// Push the selected object's current values into the panel.
    fn sync_panel(&mut self) {
        match self.selection {
            Some(Selection::Rectangle(i)) => {
                if let Some(rect) = self.rectangles.get(i) {
                    let values = [rect.x, rect.y, rect.w, rect.h];
                    for (field, value) in Field::RECTANGLE.into_iter().zip(values) {
                        self.panel.set_value(field, &format!("{value:.3}"));
                    }
                }
            }
            Some(Selection::Camera(i)) => {
                if let Some(cam) = self.cameras.get(i) {
                    self.panel.set_value(Field::CameraX, &format!("{:.3}", cam.x));
                    self.panel.set_value(Field::CameraY, &format!("{:.3}", cam.y));
                    self.panel.set_value(Field::CameraAngle, &format!("{:.1}", cam.alpha_degrees()));
                    self.panel.set_value(Field::CameraType, cam.kind().display_label());
                }
            }
            None => {}
        }
    }

    // --- Object lifecycle ---

    /// Append a default-sized rectangle at the origin and select it.
    pub fn add_rectangle(&mut self) -> Selection {
        let size = self.config.default_rect_size;
        self.rectangles.push(Rectangle::new(0.0, 0.0, size, size));
        let selection = Selection::Rectangle(self.rectangles.len() - 1);
        info!(?selection, "rectangle added");
        self.select(Some(selection));
        selection
    }

    /// Append a default-model camera at the origin and select it.
    pub fn add_camera(&mut self) -> Selection {
        self.cameras.push(Camera::new(0.0, 0.0, CameraType::default()));
        let selection = Selection::Camera(self.cameras.len() - 1);
        info!(?selection, "camera added");
        self.select(Some(selection));
        selection
    }

    /// Remove the selected object and clear the selection.
    ///
    /// # Errors
    ///
    /// `NothingSelected` without a selection; `PrimaryRectangleProtected` for
    /// rectangle 0, which stays selected.
    pub fn delete_selected(&mut self) -> Result<(), SceneError> {
        let selection = self.selection.ok_or(SceneError::NothingSelected)?;
        if selection == Selection::Rectangle(0) {
            warn!("refusing to delete the primary rectangle");
            return Err(SceneError::PrimaryRectangleProtected);
        }
        self.select(None);
        match selection {
            Selection::Rectangle(i) if i < self.rectangles.len() => {
                self.rectangles.remove(i);
            }
            Selection::Camera(i) if i < self.cameras.len() => {
                self.cameras.remove(i);
            }
            _ => return Err(SceneError::NothingSelected),
        }
        info!(?selection, "object deleted");
        Ok(())
    }

    // --- Panel edits ---

    /// Handle a field-edit notification: read the field's text from the panel
    /// and apply it. A rejected value reverts the panel to the object's values.
    ///
    /// # Errors
    ///
    /// Propagates the validation failure from [`EngineCore::set_field`].
    pub fn on_field_edit(&mut self, field: Field) -> Result<(), SceneError> {
        let raw = self.panel.value(field).unwrap_or_default();
        let result = self.set_field(field, &raw);
        if let Err(err) = &result {
            warn!(?field, %raw, error = %err, "panel edit rejected");
            self.sync_panel();
        }
        result
    }

    /// Write raw field text into the selected object.
    ///
    /// # Errors
    ///
    /// Returns `NothingSelected`, `FieldMismatch` when the field belongs to the
    /// other object kind, `InvalidNumber` for empty or non-numeric text,
    /// `SizeTooSmall` for a width/height under the minimum, or
    /// `UnknownCameraType`. The object is unchanged on error.
    pub fn set_field(&mut self, field: Field, raw: &str) -> Result<(), SceneError> {
        let selection = self.selection.ok_or(SceneError::NothingSelected)?;
        if panel_kind(selection) != field.panel() {
            return Err(SceneError::FieldMismatch(field));
        }
        match selection {
            Selection::Rectangle(i) => {
                let min_size = self.config.min_rect_size;
                let rect = self.rectangles.get_mut(i).ok_or(SceneError::NothingSelected)?;
                let value = parse_number(field, raw)?;
                match field {
                    Field::RectX => rect.x = value,
                    Field::RectY => rect.y = value,
                    Field::RectWidth | Field::RectHeight => {
                        if value < min_size {
                            return Err(SceneError::SizeTooSmall { field, value, min: min_size });
                        }
                        if field == Field::RectWidth {
                            rect.w = value;
                        } else {
                            rect.h = value;
                        }
                    }
                    _ => return Err(SceneError::FieldMismatch(field)),
                }
            }
            Selection::Camera(i) => {
                let cam = self.cameras.get_mut(i).ok_or(SceneError::NothingSelected)?;
                match field {
                    Field::CameraType => cam.set_type(raw)?,
                    Field::CameraX => cam.x = parse_number(field, raw)?,
                    Field::CameraY => cam.y = parse_number(field, raw)?,
                    Field::CameraAngle => cam.alpha = parse_number(field, raw)?.to_radians(),
                    _ => return Err(SceneError::FieldMismatch(field)),
                }
            }
        }
        debug!(?selection, ?field, %raw, "field applied");
        Ok(())
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    #[must_use]
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    #[must_use]
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    pub fn rectangle_mut(&mut self, index: usize) -> Option<&mut Rectangle> {
        self.rectangles.get_mut(index)
    }

    pub fn camera_mut(&mut self, index: usize) -> Option<&mut Camera> {
        self.cameras.get_mut(index)
    }

    #[must_use]
    pub fn panel(&self) -> &dyn Panel {
        self.panel.as_ref()
    }
}

fn panel_kind(selection: Selection) -> PanelKind {
    match selection {
        Selection::Camera(_) => PanelKind::Camera,
        Selection::Rectangle(_) => PanelKind::Rectangle,
    }
}

fn parse_number(field: Field, raw: &str) -> Result<f64, SceneError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SceneError::InvalidNumber { field, raw: raw.to_string() }),
    }
}

/// Scene-level pick. Cameras win outright, first in collection order; among
/// rectangles containing the point the smallest area wins, ties to the first.
fn pick(
    cameras: &[Camera],
    rectangles: &[Rectangle],
    world: Point,
    hits: &HitTester<'_>,
    body_radius: f64,
) -> Option<Selection> {
    if let Some(i) = cameras.iter().position(|cam| cam.select_hit(world, hits, body_radius)) {
        return Some(Selection::Camera(i));
    }
    let mut best: Option<(usize, f64)> = None;
    for (i, rect) in rectangles.iter().enumerate() {
        if !rect.contains_point(world) {
            continue;
        }
        let area = rect.area();
        if best.is_none_or(|(_, best_area)| area < best_area) {
            best = Some((i, area));
        }
    }
    best.map(|(i, _)| Selection::Rectangle(i))
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind to a canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, core: EngineCore) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut engine = Self { canvas, ctx, core };
        engine.sync_canvas_size();
        Ok(engine)
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(delta)
    }

    // --- Render ---

    /// Draw one frame. Canvas dimensions are re-read first since the host may
    /// resize the element between frames.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.sync_canvas_size();
        render::draw(&self.ctx, &self.core)
    }

    fn sync_canvas_size(&mut self) {
        self.core
            .set_canvas_size(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }
}
