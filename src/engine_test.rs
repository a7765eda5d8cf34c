#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use super::*;
use crate::hit::ResizeAnchor;

const EPSILON: f64 = 1e-9;

// =============================================================
// Helpers
// =============================================================

#[derive(Debug, Default)]
struct PanelLog {
    visible: Option<PanelKind>,
    values: HashMap<Field, String>,
}

struct RecordingPanel(Rc<RefCell<PanelLog>>);

impl Panel for RecordingPanel {
    fn show(&mut self, kind: PanelKind) {
        self.0.borrow_mut().visible = Some(kind);
    }

    fn hide(&mut self, kind: PanelKind) {
        let mut log = self.0.borrow_mut();
        if log.visible == Some(kind) {
            log.visible = None;
        }
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.0.borrow_mut().values.insert(field, value.to_string());
    }

    fn value(&self, field: Field) -> Option<String> {
        self.0.borrow().values.get(&field).cloned()
    }
}

fn core_with_panel() -> (EngineCore, Rc<RefCell<PanelLog>>) {
    let log = Rc::new(RefCell::new(PanelLog::default()));
    let core = EngineCore::with_config(SceneConfig::default(), Box::new(RecordingPanel(Rc::clone(&log)))).unwrap();
    (core, log)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Canvas position of a world point under the current view.
fn screen(core: &EngineCore, x: f64, y: f64) -> Point {
    core.mapper.world_to_canvas(Point::new(x, y))
}

fn click(core: &mut EngineCore, x: f64, y: f64) -> Vec<Action> {
    let p = screen(core, x, y);
    let mut actions = core.on_pointer_down(p, Button::Primary);
    actions.extend(core.on_pointer_up(p, Button::Primary));
    actions
}

/// Press at one world point, drag to another, release.
fn drag(core: &mut EngineCore, from: (f64, f64), to: (f64, f64)) {
    let start = screen(core, from.0, from.1);
    let end = screen(core, to.0, to.1);
    core.on_pointer_down(start, Button::Primary);
    core.on_pointer_move(end);
    core.on_pointer_up(end, Button::Primary);
}

fn click_empty(core: &mut EngineCore) {
    click(core, 2.0, 1.5);
}

fn rect_sized(core: &mut EngineCore, w: &str, h: &str) -> Selection {
    let sel = core.add_rectangle();
    core.set_field(Field::RectWidth, w).unwrap();
    core.set_field(Field::RectHeight, h).unwrap();
    sel
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_scene_has_screen_and_one_camera() {
    let core = EngineCore::new();
    assert_eq!(core.rectangles().len(), 1);
    let screen_rect = &core.rectangles()[0];
    assert_eq!((screen_rect.x, screen_rect.y, screen_rect.w, screen_rect.h), (0.0, 0.0, 1.21, 0.68));
    assert_eq!(core.cameras().len(), 1);
    assert_eq!(core.cameras()[0].center(), Point::new(-1.0, 0.0));
    assert_eq!(core.cameras()[0].kind(), CameraType::D435);
    assert!(core.selection().is_none());
}

#[test]
fn new_scene_view_is_identity_pan_and_unit_zoom() {
    let core = EngineCore::new();
    assert_eq!(core.mapper.zoom(), 1.0);
    assert!(approx_eq(core.mapper.ratio(), 200.0));
    assert_eq!(core.mapper.center_x, 0.0);
}

#[test]
fn with_config_rejects_inverted_zoom_range() {
    let config = SceneConfig { min_zoom: 5.0, max_zoom: 1.0, ..SceneConfig::default() };
    let result = EngineCore::with_config(config, Box::new(NullPanel));
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn with_config_rejects_nan_zoom_limit() {
    let config = SceneConfig { max_zoom: f64::NAN, ..SceneConfig::default() };
    assert!(EngineCore::with_config(config, Box::new(NullPanel)).is_err());
}

#[test]
fn with_config_applies_valid_overrides() {
    let config = SceneConfig { max_zoom: 4.0, ..SceneConfig::default() };
    let mut core = EngineCore::with_config(config, Box::new(NullPanel)).unwrap();
    for _ in 0..10 {
        core.on_wheel(WheelDelta { dx: 0.0, dy: -100.0 });
    }
    assert_eq!(core.mapper.zoom(), 4.0);
}

#[test]
fn set_canvas_size_ignores_zero() {
    let mut core = EngineCore::new();
    core.set_canvas_size(0.0, 0.0);
    assert!(approx_eq(core.mapper.ratio(), 200.0));
    core.set_canvas_size(440.0, 330.0);
    assert!(approx_eq(core.mapper.ratio(), 100.0));
}

// =============================================================
// Selection by click
// =============================================================

#[test]
fn click_on_camera_selects_it_and_shows_panel() {
    let (mut core, log) = core_with_panel();
    let actions = click(&mut core, -1.0, 0.0);
    assert_eq!(core.selection(), Some(Selection::Camera(0)));
    assert!(actions.contains(&Action::SelectionChanged(Some(Selection::Camera(0)))));

    let log = log.borrow();
    assert_eq!(log.visible, Some(PanelKind::Camera));
    assert_eq!(log.values[&Field::CameraX], "-1.000");
    assert_eq!(log.values[&Field::CameraY], "0.000");
    assert_eq!(log.values[&Field::CameraAngle], "0.0");
    assert_eq!(log.values[&Field::CameraType], "D435 avec squelette");
}

#[test]
fn click_inside_screen_selects_rectangle() {
    let (mut core, log) = core_with_panel();
    click(&mut core, 0.5, 0.3);
    assert_eq!(core.selection(), Some(Selection::Rectangle(0)));
    let log = log.borrow();
    assert_eq!(log.visible, Some(PanelKind::Rectangle));
    assert_eq!(log.values[&Field::RectWidth], "1.210");
    assert_eq!(log.values[&Field::RectHeight], "0.680");
}

#[test]
fn click_on_empty_space_clears_selection_and_hides_panel() {
    let (mut core, log) = core_with_panel();
    click(&mut core, 0.5, 0.3);
    let actions = click(&mut core, 2.0, 1.5);
    assert!(core.selection().is_none());
    assert!(actions.contains(&Action::SelectionChanged(None)));
    assert_eq!(log.borrow().visible, None);
}

#[test]
fn click_outside_screen_boundary_selects_nothing() {
    let mut core = EngineCore::new();
    click(&mut core, 0.7, 0.3);
    assert!(core.selection().is_none());
}

#[test]
fn cameras_win_over_rectangles() {
    let mut core = EngineCore::new();
    if let Some(cam) = core.camera_mut(0) {
        cam.x = 0.0;
    }
    assert!(core.rectangles()[0].contains_point(Point::new(0.0, 0.0)));
    click(&mut core, 0.0, 0.0);
    assert_eq!(core.selection(), Some(Selection::Camera(0)));
}

#[test]
fn first_camera_wins_when_cameras_overlap() {
    let mut core = EngineCore::new();
    core.add_camera();
    core.add_camera();
    click_empty(&mut core);
    click(&mut core, 0.0, 0.0);
    assert_eq!(core.selection(), Some(Selection::Camera(1)));
}

#[test]
fn smallest_rectangle_wins() {
    let mut core = EngineCore::new();
    rect_sized(&mut core, "0.4", "0.4");
    click_empty(&mut core);
    click(&mut core, 0.1, 0.1);
    assert_eq!(core.selection(), Some(Selection::Rectangle(1)));
}

#[test]
fn smaller_rectangle_wins_regardless_of_order() {
    let mut core = EngineCore::new();
    rect_sized(&mut core, "0.5", "0.5");
    rect_sized(&mut core, "0.3", "0.3");
    click_empty(&mut core);
    click(&mut core, 0.1, 0.1);
    assert_eq!(core.selection(), Some(Selection::Rectangle(2)));
}

#[test]
fn equal_area_tie_goes_to_first_in_order() {
    let mut core = EngineCore::new();
    rect_sized(&mut core, "0.5", "0.5");
    rect_sized(&mut core, "0.5", "0.5");
    click_empty(&mut core);
    click(&mut core, 0.1, 0.1);
    assert_eq!(core.selection(), Some(Selection::Rectangle(1)));
}

#[test]
fn click_elsewhere_switches_selection() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    assert_eq!(core.selection(), Some(Selection::Rectangle(0)));
    click(&mut core, -1.0, 0.0);
    assert_eq!(core.selection(), Some(Selection::Camera(0)));
}

// =============================================================
// Manipulation
// =============================================================

#[test]
fn press_on_selected_rectangle_starts_manipulation() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    let p = screen(&core, 0.3, 0.1);
    let actions = core.on_pointer_down(p, Button::Primary);
    assert!(core.input.is_manipulating());
    assert_eq!(core.rectangles()[0].state, RectState::Moving);
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Grabbing)]);
}

#[test]
fn press_on_unselected_object_only_selects() {
    let mut core = EngineCore::new();
    let p = screen(&core, 0.3, 0.1);
    core.on_pointer_down(p, Button::Primary);
    assert!(!core.input.is_manipulating());
    assert_eq!(core.selection(), Some(Selection::Rectangle(0)));
    assert_eq!(core.rectangles()[0].state, RectState::Default);
}

#[test]
fn drag_moves_selected_rectangle_and_syncs_panel() {
    let (mut core, log) = core_with_panel();
    click(&mut core, 0.3, 0.1);
    drag(&mut core, (0.3, 0.1), (0.5, 0.2));
    let rect = &core.rectangles()[0];
    assert!(approx_eq(rect.x, 0.2));
    assert!(approx_eq(rect.y, 0.1));
    assert!(approx_eq(rect.w, 1.21));
    let log = log.borrow();
    assert_eq!(log.values[&Field::RectX], "0.200");
    assert_eq!(log.values[&Field::RectY], "0.100");
}

#[test]
fn move_while_manipulating_reports_update() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    let start = screen(&core, 0.3, 0.1);
    core.on_pointer_down(start, Button::Primary);
    let actions = core.on_pointer_move(Point::new(start.x + 10.0, start.y));
    assert_eq!(actions, vec![Action::ObjectUpdated(Selection::Rectangle(0))]);
}

#[test]
fn drag_corner_resizes_with_opposite_corner_fixed() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    drag(&mut core, (0.605, 0.34), (0.705, 0.44));
    let rect = &core.rectangles()[0];
    assert!(approx_eq(rect.w, 1.31));
    assert!(approx_eq(rect.h, 0.78));
    assert!(approx_eq(rect.left(), -0.605));
    assert!(approx_eq(rect.top(), -0.34));
}

#[test]
fn drag_delta_is_in_world_units_at_any_zoom() {
    let mut core = EngineCore::new();
    core.mapper.set_zoom(2.0);
    click(&mut core, 0.3, 0.1);
    let start = screen(&core, 0.3, 0.1);
    core.on_pointer_down(start, Button::Primary);
    // 100px at ratio 400.
    core.on_pointer_move(Point::new(start.x + 100.0, start.y));
    assert!(approx_eq(core.rectangles()[0].x, 0.25));
}

#[test]
fn drag_rotate_handle_points_camera_at_pointer() {
    let mut core = EngineCore::new();
    click(&mut core, -1.0, 0.0);
    // D435 handle at max range 2.5 along +x.
    drag(&mut core, (1.5, 0.0), (-1.0, 1.0));
    let cam = &core.cameras()[0];
    assert!(approx_eq(cam.alpha, FRAC_PI_2));
    assert_eq!(cam.center(), Point::new(-1.0, 0.0));
}

#[test]
fn drag_camera_body_moves_it() {
    let mut core = EngineCore::new();
    click(&mut core, -1.0, 0.0);
    drag(&mut core, (-1.0, 0.0), (-0.5, 0.25));
    let cam = &core.cameras()[0];
    assert!(approx_eq(cam.x, -0.5));
    assert!(approx_eq(cam.y, 0.25));
    assert_eq!(cam.alpha, 0.0);
}

#[test]
fn pointer_up_ends_manipulation_and_resets_object_state() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    let p = screen(&core, 0.3, 0.1);
    core.on_pointer_down(p, Button::Primary);
    core.on_pointer_up(p, Button::Primary);
    assert!(!core.input.is_manipulating());
    assert_eq!(core.rectangles()[0].state, RectState::Default);

    // Later motion no longer moves the object.
    core.on_pointer_move(Point::new(p.x + 50.0, p.y));
    assert!(approx_eq(core.rectangles()[0].x, 0.0));
}

#[test]
fn hover_does_not_mutate() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    let before = core.rectangles().to_vec();
    core.on_pointer_move(screen(&core, 0.6, 0.3));
    core.on_pointer_move(screen(&core, -0.2, 0.0));
    assert_eq!(core.rectangles(), before.as_slice());
}

#[test]
fn hover_reports_handle_cursor() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    let actions = core.on_pointer_move(screen(&core, -0.605, -0.34));
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Resize(ResizeAnchor::Nw))]);
    let actions = core.on_pointer_move(screen(&core, 0.0, -0.34));
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Resize(ResizeAnchor::N))]);
    let actions = core.on_pointer_move(screen(&core, 0.1, 0.1));
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Grab)]);
    let actions = core.on_pointer_move(screen(&core, 2.0, 1.5));
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Default)]);
}

#[test]
fn hover_without_selection_is_default_cursor() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_move(screen(&core, 0.1, 0.1));
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Default)]);
}

// =============================================================
// Pan / zoom
// =============================================================

#[test]
fn secondary_drag_pans_view() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(100.0, 100.0), Button::Secondary);
    assert!(core.input.is_panning());
    core.on_pointer_move(Point::new(300.0, 100.0));
    core.on_pointer_move(Point::new(300.0, 140.0));
    assert!(approx_eq(core.mapper.center_x, 1.0));
    assert!(approx_eq(core.mapper.center_y, 0.2));
    core.on_pointer_up(Point::new(300.0, 140.0), Button::Secondary);
    assert!(!core.input.is_panning());

    core.on_pointer_move(Point::new(500.0, 500.0));
    assert!(approx_eq(core.mapper.center_x, 1.0));
}

#[test]
fn panning_leaves_objects_and_selection_alone() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Secondary);
    core.on_pointer_move(Point::new(50.0, 50.0));
    core.on_pointer_up(Point::new(50.0, 50.0), Button::Secondary);
    assert_eq!(core.selection(), Some(Selection::Rectangle(0)));
    assert!(approx_eq(core.rectangles()[0].x, 0.0));
}

#[test]
fn middle_button_is_ignored() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(screen(&core, 0.3, 0.1), Button::Middle);
    assert!(actions.is_empty());
    assert!(core.selection().is_none());
    assert!(!core.input.is_panning());
}

#[test]
fn wheel_scroll_up_zooms_in() {
    let mut core = EngineCore::new();
    core.on_wheel(WheelDelta { dx: 0.0, dy: -100.0 });
    assert!(approx_eq(core.mapper.zoom(), 2.0));
    assert!(approx_eq(core.mapper.ratio(), 400.0));
}

#[test]
fn wheel_zoom_clamps_at_limits() {
    let mut core = EngineCore::new();
    for _ in 0..20 {
        core.on_wheel(WheelDelta { dx: 0.0, dy: -100.0 });
    }
    assert_eq!(core.mapper.zoom(), 10.0);
    for _ in 0..40 {
        core.on_wheel(WheelDelta { dx: 0.0, dy: 100.0 });
    }
    assert_eq!(core.mapper.zoom(), 0.1);
}

#[test]
fn non_finite_wheel_delta_keeps_zoom_usable() {
    let mut core = EngineCore::new();
    core.on_wheel(WheelDelta { dx: 0.0, dy: f64::NAN });
    core.on_wheel(WheelDelta { dx: 0.0, dy: f64::INFINITY });
    assert_eq!(core.mapper.zoom(), 1.0);
    assert!(approx_eq(core.mapper.ratio(), 200.0));
    core.on_wheel(WheelDelta { dx: 0.0, dy: -100.0 });
    assert!(approx_eq(core.mapper.zoom(), 2.0));
}

#[test]
fn manipulation_wins_over_held_pan_until_primary_release() {
    let mut core = EngineCore::new();
    click(&mut core, 0.3, 0.1);
    let start = screen(&core, 0.3, 0.1);
    core.on_pointer_down(start, Button::Primary);
    core.on_pointer_down(start, Button::Secondary);
    assert!(core.input.is_manipulating());
    assert!(core.input.is_panning());

    // Both held: the object moves, the view stays.
    let actions = core.on_pointer_move(Point::new(start.x + 40.0, start.y));
    assert_eq!(actions, vec![Action::ObjectUpdated(Selection::Rectangle(0))]);
    assert!(approx_eq(core.rectangles()[0].x, 0.2));
    assert_eq!(core.mapper.center_x, 0.0);

    // Primary released: panning picks up from the last pointer position.
    core.on_pointer_up(Point::new(start.x + 40.0, start.y), Button::Primary);
    assert!(!core.input.is_manipulating());
    assert!(core.input.is_panning());
    core.on_pointer_move(Point::new(start.x + 60.0, start.y));
    assert!(approx_eq(core.mapper.center_x, 0.1));
    assert!(approx_eq(core.rectangles()[0].x, 0.2));

    core.on_pointer_up(Point::new(start.x + 60.0, start.y), Button::Secondary);
    assert!(!core.input.is_panning());
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn add_rectangle_appends_and_selects() {
    let (mut core, log) = core_with_panel();
    let sel = core.add_rectangle();
    assert_eq!(sel, Selection::Rectangle(1));
    assert_eq!(core.selection(), Some(sel));
    let rect = &core.rectangles()[1];
    assert_eq!((rect.x, rect.y, rect.w, rect.h), (0.0, 0.0, 1.0, 1.0));
    assert_eq!(log.borrow().visible, Some(PanelKind::Rectangle));
}

#[test]
fn add_camera_appends_and_selects() {
    let (mut core, log) = core_with_panel();
    let sel = core.add_camera();
    assert_eq!(sel, Selection::Camera(1));
    assert_eq!(core.cameras()[1].kind(), CameraType::D435);
    assert_eq!(core.cameras()[1].center(), Point::new(0.0, 0.0));
    assert_eq!(log.borrow().visible, Some(PanelKind::Camera));
}

#[test]
fn delete_primary_rectangle_is_refused() {
    let mut core = EngineCore::new();
    rect_sized(&mut core, "0.2", "0.2");
    click_empty(&mut core);
    click(&mut core, 0.5, 0.3);
    assert_eq!(core.selection(), Some(Selection::Rectangle(0)));
    let before = core.rectangles().to_vec();

    assert_eq!(core.delete_selected(), Err(SceneError::PrimaryRectangleProtected));
    assert_eq!(core.rectangles(), before.as_slice());
    assert_eq!(core.selection(), Some(Selection::Rectangle(0)));
}

#[test]
fn delete_added_rectangle_removes_and_clears_selection() {
    let (mut core, log) = core_with_panel();
    core.add_rectangle();
    assert_eq!(core.delete_selected(), Ok(()));
    assert_eq!(core.rectangles().len(), 1);
    assert!(core.selection().is_none());
    assert_eq!(log.borrow().visible, None);
}

#[test]
fn delete_camera_removes_it() {
    let mut core = EngineCore::new();
    click(&mut core, -1.0, 0.0);
    assert_eq!(core.delete_selected(), Ok(()));
    assert!(core.cameras().is_empty());
    assert!(core.selection().is_none());
}

#[test]
fn delete_without_selection_fails() {
    let mut core = EngineCore::new();
    assert_eq!(core.delete_selected(), Err(SceneError::NothingSelected));
    assert_eq!(core.rectangles().len(), 1);
    assert_eq!(core.cameras().len(), 1);
}

// =============================================================
// Panel edits
// =============================================================

#[test]
fn set_field_writes_rectangle_geometry() {
    let mut core = EngineCore::new();
    core.add_rectangle();
    core.set_field(Field::RectX, "1.5").unwrap();
    core.set_field(Field::RectY, " -0.25 ").unwrap();
    core.set_field(Field::RectWidth, "2").unwrap();
    let rect = &core.rectangles()[1];
    assert_eq!((rect.x, rect.y, rect.w, rect.h), (1.5, -0.25, 2.0, 1.0));
}

#[test]
fn set_field_rejects_malformed_numbers() {
    let mut core = EngineCore::new();
    core.add_rectangle();
    for raw in ["", "abc", "1.2.3", "NaN", "inf"] {
        let err = core.set_field(Field::RectX, raw).unwrap_err();
        assert!(matches!(err, SceneError::InvalidNumber { field: Field::RectX, .. }), "{raw:?}");
    }
    assert_eq!(core.rectangles()[1].x, 0.0);
}

#[test]
fn set_field_rejects_tiny_sizes() {
    let mut core = EngineCore::new();
    core.add_rectangle();
    let err = core.set_field(Field::RectHeight, "0").unwrap_err();
    assert!(matches!(err, SceneError::SizeTooSmall { field: Field::RectHeight, .. }));
    assert!(core.set_field(Field::RectWidth, "-3").is_err());
    assert_eq!(core.rectangles()[1].h, 1.0);
    assert_eq!(core.rectangles()[1].w, 1.0);
}

#[test]
fn set_field_requires_matching_selection() {
    let mut core = EngineCore::new();
    assert_eq!(core.set_field(Field::RectX, "1"), Err(SceneError::NothingSelected));
    core.add_rectangle();
    assert_eq!(core.set_field(Field::CameraX, "1"), Err(SceneError::FieldMismatch(Field::CameraX)));
}

#[test]
fn camera_angle_field_is_degrees() {
    let mut core = EngineCore::new();
    core.add_camera();
    core.set_field(Field::CameraAngle, "90").unwrap();
    assert!(approx_eq(core.cameras()[1].alpha, FRAC_PI_2));
}

#[test]
fn camera_type_field_rebinds_model() {
    let mut core = EngineCore::new();
    core.add_camera();
    core.set_field(Field::CameraType, "D415 sans squelette").unwrap();
    assert_eq!(core.cameras()[1].kind(), CameraType::D415Rs);
    assert_eq!(core.cameras()[1].spec().max_range, 15.0);
}

#[test]
fn on_field_edit_reads_value_from_panel() {
    let (mut core, log) = core_with_panel();
    core.add_rectangle();
    log.borrow_mut().values.insert(Field::RectWidth, "2.5".into());
    assert_eq!(core.on_field_edit(Field::RectWidth), Ok(()));
    assert_eq!(core.rectangles()[1].w, 2.5);
}

#[test]
fn rejected_edit_reverts_panel() {
    let (mut core, log) = core_with_panel();
    core.add_rectangle();
    log.borrow_mut().values.insert(Field::RectWidth, "wide".into());
    assert!(core.on_field_edit(Field::RectWidth).is_err());
    assert_eq!(core.rectangles()[1].w, 1.0);
    assert_eq!(log.borrow().values[&Field::RectWidth], "1.000");
}

#[test]
fn rejected_camera_type_reverts_panel_label() {
    let (mut core, log) = core_with_panel();
    core.add_camera();
    log.borrow_mut().values.insert(Field::CameraType, "Kinect".into());
    assert_eq!(
        core.on_field_edit(Field::CameraType),
        Err(SceneError::UnknownCameraType("Kinect".into()))
    );
    assert_eq!(core.cameras()[1].kind(), CameraType::D435);
    assert_eq!(log.borrow().values[&Field::CameraType], "D435 avec squelette");
}

#[test]
fn missing_panel_value_is_rejected() {
    let mut core = EngineCore::new();
    core.add_rectangle();
    assert!(matches!(
        core.on_field_edit(Field::RectX),
        Err(SceneError::InvalidNumber { .. })
    ));
}
