//! Axis-aligned rectangular regions and their move/resize state machine.
//!
//! Geometry is center-based: `(x, y)` is the center, `w`/`h` the full size,
//! all in world units. Handle zones are resolved in a fixed priority order
//! (corners, then sides, then interior) because the small handle zones
//! overlap the interior.

#[cfg(test)]
#[path = "rectangle_test.rs"]
mod rectangle_test;

use crate::hit::{HitPart, HitTester, ResizeAnchor};
use crate::input::Cursor;
use crate::mapper::Point;

/// Manipulation state, held only while the primary button is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectState {
    #[default]
    Default,
    Moving,
    Resize(ResizeAnchor),
}

impl From<HitPart> for RectState {
    fn from(part: HitPart) -> Self {
        match part {
            HitPart::Body => Self::Moving,
            HitPart::ResizeHandle(anchor) => Self::Resize(anchor),
            HitPart::RotateHandle => Self::Default,
        }
    }
}

/// Corners in hit-test order.
///
/// ```text
/// Nw ____ Ne
/// |        |
/// Sw ____ Se
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Corner {
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    #[must_use]
    pub fn anchor(self) -> ResizeAnchor {
        match self {
            Self::Nw => ResizeAnchor::Nw,
            Self::Ne => ResizeAnchor::Ne,
            Self::Sw => ResizeAnchor::Sw,
            Self::Se => ResizeAnchor::Se,
        }
    }
}

/// Sides in hit-test order: top, left, bottom, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    N,
    W,
    S,
    E,
}

impl Side {
    pub const ALL: [Self; 4] = [Self::N, Self::W, Self::S, Self::E];

    #[must_use]
    pub fn anchor(self) -> ResizeAnchor {
        match self {
            Self::N => ResizeAnchor::N,
            Self::W => ResizeAnchor::W,
            Self::S => ResizeAnchor::S,
            Self::E => ResizeAnchor::E,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub state: RectState,
}

impl Rectangle {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h, state: RectState::Default }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.x - self.w / 2.0
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w / 2.0
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y - self.h / 2.0
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Strict interior test; boundary points are outside.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        self.left() < p.x && p.x < self.right() && self.top() < p.y && p.y < self.bottom()
    }

    #[must_use]
    pub fn corner_point(&self, corner: Corner) -> Point {
        match corner {
            Corner::Nw => Point::new(self.left(), self.top()),
            Corner::Ne => Point::new(self.right(), self.top()),
            Corner::Sw => Point::new(self.left(), self.bottom()),
            Corner::Se => Point::new(self.right(), self.bottom()),
        }
    }

    #[must_use]
    pub fn corner_hit(&self, p: Point, corner: Corner, hits: &HitTester<'_>) -> bool {
        hits.is_clickable(self.corner_point(corner), p, 0.0)
    }

    /// Near the side's line and within its perpendicular extent.
    #[must_use]
    pub fn side_hit(&self, p: Point, side: Side, hits: &HitTester<'_>) -> bool {
        match side {
            Side::N | Side::S => {
                let edge_y = if side == Side::N { self.top() } else { self.bottom() };
                self.left() < p.x && p.x < self.right() && hits.is_clickable(Point::new(p.x, edge_y), p, 0.0)
            }
            Side::W | Side::E => {
                let edge_x = if side == Side::W { self.left() } else { self.right() };
                self.top() < p.y && p.y < self.bottom() && hits.is_clickable(Point::new(edge_x, p.y), p, 0.0)
            }
        }
    }

    /// First matching zone: corners, then sides, then interior.
    #[must_use]
    pub fn hit_test(&self, p: Point, hits: &HitTester<'_>) -> Option<HitPart> {
        if let Some(corner) = Corner::ALL.into_iter().find(|&c| self.corner_hit(p, c, hits)) {
            return Some(HitPart::ResizeHandle(corner.anchor()));
        }
        if let Some(side) = Side::ALL.into_iter().find(|&s| self.side_hit(p, s, hits)) {
            return Some(HitPart::ResizeHandle(side.anchor()));
        }
        self.contains_point(p).then_some(HitPart::Body)
    }

    /// Enter the manipulation state for whatever zone is under `p`.
    ///
    /// Returns `false` and leaves the state untouched when nothing is hit.
    pub fn on_pointer_down(&mut self, p: Point, hits: &HitTester<'_>) -> bool {
        match self.hit_test(p, hits) {
            Some(part) => {
                self.state = RectState::from(part);
                true
            }
            None => false,
        }
    }

    /// Apply a world-space pointer delta according to the current state.
    ///
    /// Resizes keep the opposite edge fixed by shifting the center half as far
    /// as the size changes. Width and height never drop below `min_size`; when
    /// clamped, only the permitted part of the delta is applied.
    pub fn apply_manip_delta(&mut self, dx: f64, dy: f64, min_size: f64) {
        let anchor = match self.state {
            RectState::Default => return,
            RectState::Moving => {
                self.x += dx;
                self.y += dy;
                return;
            }
            RectState::Resize(anchor) => anchor,
        };

        // Sign of the size change per unit of pointer motion, or `None` when
        // the handle doesn't act on that axis.
        let (grow_x, grow_y): (Option<f64>, Option<f64>) = match anchor {
            ResizeAnchor::Nw => (Some(-1.0), Some(-1.0)),
            ResizeAnchor::Ne => (Some(1.0), Some(-1.0)),
            ResizeAnchor::Sw => (Some(-1.0), Some(1.0)),
            ResizeAnchor::Se => (Some(1.0), Some(1.0)),
            ResizeAnchor::N => (None, Some(-1.0)),
            ResizeAnchor::S => (None, Some(1.0)),
            ResizeAnchor::W => (Some(-1.0), None),
            ResizeAnchor::E => (Some(1.0), None),
        };

        if let Some(sign) = grow_x {
            let new_w = sign.mul_add(dx, self.w).max(min_size);
            self.x += (new_w - self.w) * sign / 2.0;
            self.w = new_w;
        }
        if let Some(sign) = grow_y {
            let new_h = sign.mul_add(dy, self.h).max(min_size);
            self.y += (new_h - self.h) * sign / 2.0;
            self.h = new_h;
        }
    }

    /// Cursor hint for hovering `p`, if any zone is under it.
    #[must_use]
    pub fn hover_cursor(&self, p: Point, hits: &HitTester<'_>) -> Option<Cursor> {
        self.hit_test(p, hits).map(|part| match part {
            HitPart::ResizeHandle(anchor) => Cursor::Resize(anchor),
            HitPart::Body | HitPart::RotateHandle => Cursor::Grab,
        })
    }
}
