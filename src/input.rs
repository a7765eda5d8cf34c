//! Input model: mouse buttons, wheel deltas, cursor hints, selection, and gesture state.
//!
//! `InputState` tracks the two gestures that can be in flight between a
//! pointer-down and its matching pointer-up: panning the view with the
//! secondary button, and manipulating the selected object with the primary
//! button. They are independent; either, both, or neither may be active.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::hit::ResizeAnchor;
use crate::mapper::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Cursor hint for the host to apply to the canvas element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Grab,
    Grabbing,
    Resize(ResizeAnchor),
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
            Self::Resize(anchor) => anchor.cursor_name(),
        }
    }
}

/// The selected object: its kind and index in that kind's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Camera(usize),
    Rectangle(usize),
}

/// Gestures in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    /// Canvas-pixel position of the previous pan event while the secondary button is held.
    pub pan_last_screen: Option<Point>,
    /// World position of the previous manipulation event while the primary button is held.
    pub manip_last_world: Option<Point>,
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_last_screen.is_some()
    }

    #[must_use]
    pub fn is_manipulating(&self) -> bool {
        self.manip_last_world.is_some()
    }
}
