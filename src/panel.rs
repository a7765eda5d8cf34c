//! Side-panel contract: the form that mirrors the selected object.
//!
//! The engine never reaches into the document. It talks to whatever the host
//! injects through [`Panel`]: show or hide one of the two forms, and read or
//! write a field's raw text.

/// Which form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Rectangle,
    Camera,
}

/// Editable fields. Rectangle fields carry world units; camera orientation
/// is shown in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RectX,
    RectY,
    RectWidth,
    RectHeight,
    CameraX,
    CameraY,
    CameraAngle,
    CameraType,
}

impl Field {
    pub const RECTANGLE: [Self; 4] = [Self::RectX, Self::RectY, Self::RectWidth, Self::RectHeight];
    pub const CAMERA: [Self; 4] = [Self::CameraX, Self::CameraY, Self::CameraAngle, Self::CameraType];

    #[must_use]
    pub fn panel(self) -> PanelKind {
        match self {
            Self::RectX | Self::RectY | Self::RectWidth | Self::RectHeight => PanelKind::Rectangle,
            Self::CameraX | Self::CameraY | Self::CameraAngle | Self::CameraType => PanelKind::Camera,
        }
    }
}

pub trait Panel {
    fn show(&mut self, kind: PanelKind);
    fn hide(&mut self, kind: PanelKind);
    fn set_value(&mut self, field: Field, value: &str);
    fn value(&self, field: Field) -> Option<String>;
}

/// A panel that displays nothing, for hosts without a form.
#[derive(Debug, Default)]
pub struct NullPanel;

impl Panel for NullPanel {
    fn show(&mut self, _kind: PanelKind) {}

    fn hide(&mut self, _kind: PanelKind) {}

    fn set_value(&mut self, _field: Field, _value: &str) {}

    fn value(&self, _field: Field) -> Option<String> {
        None
    }
}
