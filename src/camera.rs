//! Depth cameras: an oriented body with an annular field-of-view wedge.
//!
//! Each camera model binds a detection range and a field of view. The
//! ranges are approximate vendor figures, good enough for layout planning.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::SceneError;
use crate::hit::{HitPart, HitTester};
use crate::input::Cursor;
use crate::mapper::Point;

/// Camera model. The `Rs` variants track bodies without the skeleton SDK,
/// which buys much longer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraType {
    #[default]
    D435,
    D435Rs,
    D415,
    D415Rs,
}

/// Constants bound to a camera model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpec {
    /// Nearest tracked distance, world units.
    pub min_range: f64,
    /// Farthest tracked distance, world units.
    pub max_range: f64,
    /// Full cone angle, radians.
    pub fov: f64,
    /// CSS fill color for the wedge and body.
    pub color: &'static str,
}

const D435_FOV_DEG: f64 = 86.0;
const D415_FOV_DEG: f64 = 65.0;

impl CameraType {
    pub const ALL: [Self; 4] = [Self::D435, Self::D435Rs, Self::D415, Self::D415Rs];

    #[must_use]
    pub fn spec(self) -> CameraSpec {
        match self {
            Self::D435 => CameraSpec {
                min_range: 1.0,
                max_range: 2.5,
                fov: D435_FOV_DEG.to_radians(),
                color: "rgba(0, 255, 0, 0.5)",
            },
            Self::D435Rs => CameraSpec {
                min_range: 1.5,
                max_range: 10.0,
                fov: D435_FOV_DEG.to_radians(),
                color: "rgba(255, 255, 0, 0.5)",
            },
            Self::D415 => CameraSpec {
                min_range: 1.5,
                max_range: 4.0,
                fov: D415_FOV_DEG.to_radians(),
                color: "rgba(0, 0, 255, 0.5)",
            },
            Self::D415Rs => CameraSpec {
                min_range: 1.5,
                max_range: 15.0,
                fov: D415_FOV_DEG.to_radians(),
                color: "rgba(255, 255, 0, 0.5)",
            },
        }
    }

    /// Canonical token, e.g. `D435_RS`.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::D435 => "D435",
            Self::D435Rs => "D435_RS",
            Self::D415 => "D415",
            Self::D415Rs => "D415_RS",
        }
    }

    /// Label shown in the side panel's type selector.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::D435 => "D435 avec squelette",
            Self::D435Rs => "D435 sans squelette",
            Self::D415 => "D415 avec squelette",
            Self::D415Rs => "D415 sans squelette",
        }
    }
}

impl fmt::Display for CameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for CameraType {
    type Err = SceneError;

    /// Accepts the canonical token or the panel label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.token().eq_ignore_ascii_case(needle) || t.display_label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SceneError::UnknownCameraType(s.to_string()))
    }
}

/// Manipulation state, held only while the primary button is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Default,
    Moving,
    Rotate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    /// Orientation in radians; 0 faces +x, positive turns toward +y.
    pub alpha: f64,
    kind: CameraType,
    spec: CameraSpec,
    pub state: CameraState,
}

impl Camera {
    #[must_use]
    pub fn new(x: f64, y: f64, kind: CameraType) -> Self {
        Self { x, y, alpha: 0.0, kind, spec: kind.spec(), state: CameraState::Default }
    }

    #[must_use]
    pub fn kind(&self) -> CameraType {
        self.kind
    }

    #[must_use]
    pub fn spec(&self) -> CameraSpec {
        self.spec
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Rebind the model from a token or panel label.
    ///
    /// Position and orientation are kept.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCameraType` and leaves the current model in place when
    /// the token names no model.
    pub fn set_type(&mut self, token: &str) -> Result<(), SceneError> {
        let kind: CameraType = token.parse()?;
        self.set_kind(kind);
        Ok(())
    }

    pub fn set_kind(&mut self, kind: CameraType) {
        self.kind = kind;
        self.spec = kind.spec();
    }

    /// The rotate handle sits at `max_range` along the orientation.
    #[must_use]
    pub fn rotate_handle(&self) -> Point {
        let (sin, cos) = self.alpha.sin_cos();
        Point::new(self.spec.max_range.mul_add(cos, self.x), self.spec.max_range.mul_add(sin, self.y))
    }

    #[must_use]
    pub fn select_hit(&self, p: Point, hits: &HitTester<'_>, body_radius: f64) -> bool {
        hits.is_clickable(self.center(), p, body_radius)
    }

    #[must_use]
    pub fn rotate_handle_hit(&self, p: Point, hits: &HitTester<'_>, body_radius: f64) -> bool {
        hits.is_clickable(self.rotate_handle(), p, body_radius / 2.0)
    }

    /// Body first, then the rotate handle.
    #[must_use]
    pub fn hit_test(&self, p: Point, hits: &HitTester<'_>, body_radius: f64) -> Option<HitPart> {
        if self.select_hit(p, hits, body_radius) {
            Some(HitPart::Body)
        } else if self.rotate_handle_hit(p, hits, body_radius) {
            Some(HitPart::RotateHandle)
        } else {
            None
        }
    }

    pub fn on_pointer_down(&mut self, p: Point, hits: &HitTester<'_>, body_radius: f64) -> bool {
        match self.hit_test(p, hits, body_radius) {
            Some(HitPart::Body) => self.state = CameraState::Moving,
            Some(HitPart::RotateHandle) => self.state = CameraState::Rotate,
            Some(HitPart::ResizeHandle(_)) | None => return false,
        }
        true
    }

    /// Apply pointer motion. Rotation is absolute: the orientation becomes the
    /// bearing from the center to `pointer`.
    pub fn apply_manip_delta(&mut self, pointer: Point, dx: f64, dy: f64) {
        match self.state {
            CameraState::Moving => {
                self.x += dx;
                self.y += dy;
            }
            CameraState::Rotate => {
                self.alpha = (pointer.y - self.y).atan2(pointer.x - self.x);
            }
            CameraState::Default => {}
        }
    }

    #[must_use]
    pub fn hover_cursor(&self, p: Point, hits: &HitTester<'_>, body_radius: f64) -> Option<Cursor> {
        self.hit_test(p, hits, body_radius).map(|_| Cursor::Grab)
    }

    /// Start and end angles of the field-of-view wedge.
    #[must_use]
    pub fn fov_bounds(&self) -> (f64, f64) {
        let half = self.spec.fov / 2.0;
        (self.alpha - half, self.alpha + half)
    }

    /// Orientation in degrees, normalized to (-180, 180].
    #[must_use]
    pub fn alpha_degrees(&self) -> f64 {
        let wrapped = self.alpha.sin().atan2(self.alpha.cos());
        if wrapped <= -PI { 180.0 } else { wrapped.to_degrees() }
    }
}
