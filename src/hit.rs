//! Pixel-tolerance hit-testing.
//!
//! Objects test handles through a borrowed [`HitTester`] rather than a
//! reference back to the engine: they see the transform and the tolerance,
//! nothing else.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::mapper::{CoordinateMapper, Point};

/// Which part of an object was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    ResizeHandle(ResizeAnchor),
    RotateHandle,
}

/// Anchor position for resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAnchor {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeAnchor {
    /// CSS cursor name for hovering this handle.
    #[must_use]
    pub fn cursor_name(self) -> &'static str {
        match self {
            Self::N => "n-resize",
            Self::Ne => "ne-resize",
            Self::E => "e-resize",
            Self::Se => "se-resize",
            Self::S => "s-resize",
            Self::Sw => "sw-resize",
            Self::W => "w-resize",
            Self::Nw => "nw-resize",
        }
    }
}

/// "Close enough" test in canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct HitTester<'a> {
    mapper: &'a CoordinateMapper,
    tolerance_px: f64,
}

impl<'a> HitTester<'a> {
    #[must_use]
    pub fn new(mapper: &'a CoordinateMapper, tolerance_px: f64) -> Self {
        Self { mapper, tolerance_px }
    }

    /// Whether `pointer` lies within the click tolerance of `target`.
    ///
    /// Both points are in world units. The radius is the fixed pixel tolerance
    /// plus `extra_world_radius` scaled to pixels, so handles drawn at world
    /// scale stay clickable over their whole visible area.
    #[must_use]
    pub fn is_clickable(&self, target: Point, pointer: Point, extra_world_radius: f64) -> bool {
        let a = self.mapper.world_to_canvas(target);
        let b = self.mapper.world_to_canvas(pointer);
        let radius = self.mapper.ratio().mul_add(extra_world_radius, self.tolerance_px);
        a.dist_sq(b) < radius * radius
    }
}
